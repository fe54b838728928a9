//! E2E tests: nested ingestion and the assembled tree.

use serde_json::json;

use super::test_helpers::*;

fn nightly_payload() -> serde_json::Value {
    json!({
        "name": "Nightly",
        "status": "passed",
        "suites": [{
            "name": "Auth",
            "status": "passed",
            "total": 2,
            "passed": 2,
            "cases": [{
                "name": "login",
                "status": "passed",
                "logs": [{ "message": "start" }, { "message": "ok" }]
            }]
        }]
    })
}

/// The reference scenario: one suite, one case, two defaulted logs.
#[actix_rt::test]
async fn test_nightly_scenario() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let run_id = ingest(&app, nightly_payload()).await;
    let run = run_detail(&app, &run_id).await;

    assert_eq!(run["id"], run_id.as_str());
    assert_eq!(run["name"], "Nightly");
    assert_eq!(run["status"], "passed");
    assert_eq!(run["total"], 2);
    assert_eq!(run["passed"], 2);
    assert_eq!(run["failed"], 0);
    assert_eq!(run["skipped"], 0);
    assert_eq!(run["blocked"], 0);

    let suites = run["suites"].as_array().unwrap();
    assert_eq!(suites.len(), 1);
    assert_eq!(suites[0]["name"], "Auth");
    assert_eq!(suites[0]["order"], 0);

    let cases = suites[0]["cases"].as_array().unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0]["name"], "login");
    assert_eq!(cases[0]["retries"], 0);

    let logs = cases[0]["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["message"], "start");
    assert_eq!(logs[1]["message"], "ok");
    assert_eq!(logs[0]["level"], "INFO");
    assert_eq!(logs[1]["level"], "INFO");
    assert_eq!(logs[0]["timestamp"], logs[1]["timestamp"]);
}

/// Every child points at its parents, and storage-only columns stay hidden.
#[actix_rt::test]
async fn test_ingested_records_cross_reference() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let run_id = ingest(&app, nightly_payload()).await;
    let run = run_detail(&app, &run_id).await;

    let suite = &run["suites"][0];
    let case = &suite["cases"][0];
    assert_eq!(suite["run_id"], run_id.as_str());
    assert_eq!(case["run_id"], run_id.as_str());
    assert_eq!(case["suite_id"], suite["id"]);
    assert!(case.get("sequence").is_none());

    for log in case["logs"].as_array().unwrap() {
        assert_eq!(log["run_id"], run_id.as_str());
        assert_eq!(log["case_id"], case["id"]);
        assert!(log.get("sequence").is_none());
    }
}

/// Run counters are the sums of the supplied suite counters, not of cases,
/// and blocked stays 0.
#[actix_rt::test]
async fn test_run_counters_sum_supplied_suite_counters() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let run_id = ingest(
        &app,
        json!({
            "name": "Regression",
            "total": 100,
            "blocked": 9,
            "suites": [
                { "name": "A", "total": 5, "passed": 3, "failed": 1, "skipped": 1 },
                { "name": "B", "total": 4, "failed": 4 },
                {
                    "name": "C",
                    "cases": [
                        { "name": "c1", "status": "passed" },
                        { "name": "c2", "status": "blocked" }
                    ]
                }
            ]
        }),
    )
    .await;

    let run = run_detail(&app, &run_id).await;
    assert_eq!(run["total"], 9);
    assert_eq!(run["passed"], 3);
    assert_eq!(run["failed"], 5);
    assert_eq!(run["skipped"], 1);
    assert_eq!(run["blocked"], 0);

    // Stored suite counters are what was supplied; case_counts are derived
    let suite_c = &run["suites"][2];
    assert_eq!(suite_c["total"], 0);
    assert_eq!(suite_c["case_counts"]["total"], 2);
    assert_eq!(suite_c["case_counts"]["passed"], 1);
    assert_eq!(suite_c["case_counts"]["blocked"], 0);
}

#[actix_rt::test]
async fn test_suites_default_to_payload_order() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let run_id = ingest(
        &app,
        json!({
            "name": "Ordered",
            "suites": [{ "name": "first" }, { "name": "second" }, { "name": "third" }]
        }),
    )
    .await;

    let run = run_detail(&app, &run_id).await;
    assert_eq!(names(&run["suites"]), vec!["first", "second", "third"]);

    let orders: Vec<i64> = run["suites"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[actix_rt::test]
async fn test_suites_sorted_by_explicit_order() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let run_id = ingest(
        &app,
        json!({
            "name": "Reordered",
            "suites": [
                { "name": "c", "order": 30 },
                { "name": "a", "order": 10 },
                { "name": "b", "order": 20 }
            ]
        }),
    )
    .await;

    let run = run_detail(&app, &run_id).await;
    assert_eq!(names(&run["suites"]), vec!["a", "b", "c"]);
}

#[actix_rt::test]
async fn test_cases_keep_insertion_order() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let run_id = ingest(
        &app,
        json!({
            "name": "Cases",
            "suites": [{
                "name": "S",
                "cases": [{ "name": "zeta" }, { "name": "alpha" }, { "name": "mu" }]
            }]
        }),
    )
    .await;

    let run = run_detail(&app, &run_id).await;
    assert_eq!(names(&run["suites"][0]["cases"]), vec!["zeta", "alpha", "mu"]);
}

#[actix_rt::test]
async fn test_logs_sorted_by_timestamp() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let run_id = ingest(
        &app,
        json!({
            "name": "Logs",
            "suites": [{
                "name": "S",
                "cases": [{
                    "name": "c",
                    "logs": [
                        { "message": "third", "timestamp": "2026-10-17T12:00:03Z" },
                        { "message": "first", "timestamp": "2026-10-17T12:00:01Z", "level": "STEP", "step": "open" },
                        { "message": "second", "timestamp": "2026-10-17T12:00:02Z", "level": "ERROR" }
                    ]
                }]
            }]
        }),
    )
    .await;

    let run = run_detail(&app, &run_id).await;
    let logs = run["suites"][0]["cases"][0]["logs"].as_array().unwrap();
    let messages: Vec<&str> = logs.iter().map(|l| l["message"].as_str().unwrap()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert_eq!(logs[0]["level"], "STEP");
    assert_eq!(logs[0]["step"], "open");
}

/// More cases than SQLite accepts bind parameters in one statement.
#[actix_rt::test]
async fn test_large_run_reads_back() {
    const CASES: usize = 33_000;

    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let cases: Vec<serde_json::Value> = (0..CASES)
        .map(|i| json!({ "name": format!("c{}", i) }))
        .collect();
    let mut payload = json!({ "name": "Large", "suites": [{ "name": "S", "cases": cases }] });
    payload["suites"][0]["cases"][CASES - 1]["logs"] = json!([{ "message": "tail" }]);

    let run_id = ingest(&app, payload).await;

    let (status, run) = get_json(&app, &format!("/api/v1/runs/{}", run_id)).await;
    assert_eq!(status, 200, "{}", run["message"]);

    let cases = run["suites"][0]["cases"].as_array().unwrap();
    assert_eq!(cases.len(), CASES);
    assert_eq!(cases[0]["name"], "c0");
    assert_eq!(cases[CASES - 1]["name"], format!("c{}", CASES - 1));
    assert_eq!(cases[CASES - 1]["logs"][0]["message"], "tail");
    assert_eq!(run["suites"][0]["case_counts"]["total"], CASES);
}

/// Ingestion has no dedup key: the same payload twice yields two trees.
#[actix_rt::test]
async fn test_double_ingest_creates_two_runs() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let first = ingest(&app, nightly_payload()).await;
    let second = ingest(&app, nightly_payload()).await;
    assert_ne!(first, second);

    let first_run = run_detail(&app, &first).await;
    let second_run = run_detail(&app, &second).await;
    assert_ne!(first_run["suites"][0]["id"], second_run["suites"][0]["id"]);

    let (status, runs) = get_json(&app, "/api/v1/runs").await;
    assert_eq!(status, 200);
    assert_eq!(runs.as_array().unwrap().len(), 2);
}

/// A bad record deep in the payload is reported by path and nothing is stored.
#[actix_rt::test]
async fn test_validation_failure_writes_nothing() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/ingest",
        json!({
            "name": "Broken",
            "suites": [
                { "name": "fine", "cases": [{ "name": "ok", "logs": [{ "message": "m" }] }] },
                { "name": "bad", "cases": [{ "name": "c", "logs": [{ "message": "m", "level": "TRACE" }] }] }
            ]
        }),
    )
    .await;

    assert_eq!(status, 400, "{}", body);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("suites[1].cases[0].logs[0].level"),
        "{}",
        body
    );

    let (_, runs) = get_json(&app, "/api/v1/runs").await;
    assert!(runs.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_ingest_rejects_negative_and_missing_fields() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/ingest",
        json!({ "name": "R", "suites": [{ "name": "S", "total": -1 }] }),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().contains("suites[0].total"));

    let (status, body) = post_json(&app, "/api/v1/ingest", json!({ "suites": [] })).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().starts_with("Validation failed: name"));

    let (status, body) = post_json(
        &app,
        "/api/v1/ingest",
        json!({ "name": "R", "suites": [{ "name": "S", "status": "timedOut" }] }),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().contains("suites[0].status"));
}

#[actix_rt::test]
async fn test_ingest_rejects_malformed_json() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let req = actix_web::test::TestRequest::post()
        .uri("/api/v1/ingest")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"name\": \"unterminated")
        .to_request();
    let resp = actix_web::test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_INPUT");
}
