//! Service-level tests: the ingestion pipeline and assembler called directly.

use test_run_report_lib::error::AppError;
use test_run_report_lib::models::{
    CaseInput, ExecutionStatus, IngestCase, IngestRunRequest, IngestSuite, ListRunsQuery,
    LogInput, LogLevel, RecordId, RunInput, SuiteInput,
};
use test_run_report_lib::services::{assemble_run_detail, ingest_run, records};

use super::test_helpers::create_test_pool;

fn case(name: &str, status: &str, logs: usize) -> IngestCase {
    IngestCase {
        case: CaseInput {
            name: Some(name.to_string()),
            status: Some(status.to_string()),
            ..Default::default()
        },
        logs: (0..logs)
            .map(|i| LogInput {
                message: Some(format!("{} log {}", name, i)),
                ..Default::default()
            })
            .collect(),
    }
}

fn payload() -> IngestRunRequest {
    IngestRunRequest {
        run: RunInput {
            name: Some("Pipeline".to_string()),
            tags: vec!["svc".to_string()],
            ..Default::default()
        },
        suites: vec![
            IngestSuite {
                suite: SuiteInput {
                    name: Some("api".to_string()),
                    total: Some(3),
                    passed: Some(2),
                    failed: Some(1),
                    ..Default::default()
                },
                cases: vec![case("get", "passed", 2), case("put", "passed", 0), case("del", "failed", 1)],
            },
            IngestSuite {
                suite: SuiteInput {
                    name: Some("ui".to_string()),
                    total: Some(1),
                    skipped: Some(1),
                    ..Default::default()
                },
                cases: vec![case("render", "skipped", 0)],
            },
        ],
    }
}

#[actix_rt::test]
async fn test_ingest_outcome_counts_records() {
    let pool = create_test_pool().await;

    let outcome = ingest_run(&pool, &payload()).await.unwrap();
    assert_eq!(outcome.suites, 2);
    assert_eq!(outcome.cases, 4);
    assert_eq!(outcome.logs, 3);
    assert_eq!(outcome.counts.total, 4);
    assert_eq!(outcome.counts.passed, 2);
    assert_eq!(outcome.counts.failed, 1);
    assert_eq!(outcome.counts.skipped, 1);
    assert_eq!(outcome.counts.blocked, 0);
}

#[actix_rt::test]
async fn test_assembled_tree_matches_ingested_payload() {
    let pool = create_test_pool().await;

    let outcome = ingest_run(&pool, &payload()).await.unwrap();
    let detail = assemble_run_detail(&pool, outcome.run_id).await.unwrap();

    assert_eq!(detail.run.id, outcome.run_id);
    assert_eq!(detail.run.tags, vec!["svc".to_string()]);
    assert_eq!(detail.run.status, ExecutionStatus::Running);
    assert_eq!(detail.run.total, 4);
    assert_eq!(detail.suites.len(), 2);

    let api = &detail.suites[0];
    assert_eq!(api.suite.name, "api");
    assert_eq!(api.case_counts.total, 3);
    assert_eq!(api.case_counts.passed, 2);
    assert_eq!(api.case_counts.failed, 1);

    let names: Vec<&str> = api.cases.iter().map(|c| c.case.name.as_str()).collect();
    assert_eq!(names, vec!["get", "put", "del"]);
    assert_eq!(api.cases[0].logs.len(), 2);
    assert_eq!(api.cases[0].logs[0].level, LogLevel::Info);
    assert_eq!(api.cases[0].logs[0].message, "get log 0");
    assert!(api.cases[1].logs.is_empty());

    for suite in &detail.suites {
        assert_eq!(suite.suite.run_id, outcome.run_id);
        for case in &suite.cases {
            assert_eq!(case.case.suite_id, suite.suite.id);
            for log in &case.logs {
                assert_eq!(log.case_id, case.case.id);
            }
        }
    }
}

#[actix_rt::test]
async fn test_rejected_payload_leaves_store_empty() {
    let pool = create_test_pool().await;

    let mut bad = payload();
    bad.suites[1].cases[0].case.retries = Some(-1);

    match ingest_run(&pool, &bad).await {
        Err(AppError::Validation(e)) => assert_eq!(e.field, "suites[1].cases[0].retries"),
        other => panic!("expected validation error, got {:?}", other.map(|o| o.run_id)),
    }

    let runs = records::list_runs(&pool, &ListRunsQuery::default()).await.unwrap();
    assert!(runs.is_empty());
}

#[actix_rt::test]
async fn test_assemble_unknown_run_is_not_found() {
    let pool = create_test_pool().await;

    let result = assemble_run_detail(&pool, RecordId::generate()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
