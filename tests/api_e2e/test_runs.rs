//! E2E tests: run creation, listing, detail lookup and finishing.

use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_create_run_applies_defaults() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let run_id = create_run(
        &app,
        json!({ "name": "Smoke", "branch": "main", "tags": ["smoke", "web"] }),
    )
    .await;

    let run = run_detail(&app, &run_id).await;
    assert_eq!(run["status"], "running");
    assert_eq!(run["branch"], "main");
    assert_eq!(run["total"], 0);
    assert_eq!(run["tags"], json!(["smoke", "web"]));
    assert!(run["started_at"].is_string());
    assert!(run["finished_at"].is_null());
    assert_eq!(run["suites"], json!([]));
}

#[actix_rt::test]
async fn test_create_run_requires_name() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = post_json(&app, "/api/v1/runs", json!({ "status": "passed" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("name"));

    let (status, body) = post_json(
        &app,
        "/api/v1/runs",
        json!({ "name": "R", "duration_ms": -5 }),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().contains("duration_ms"));
}

#[actix_rt::test]
async fn test_unknown_run_is_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get_json(
        &app,
        "/api/v1/runs/0192a7e4-3b1c-7d2e-8f00-123456789abc",
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_rt::test]
async fn test_malformed_run_id_is_bad_request() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    for id in ["not-an-id", "507f1f77bcf86cd799439011", "123"] {
        let (status, body) = get_json(&app, &format!("/api/v1/runs/{}", id)).await;
        assert_eq!(status, 400, "id {}: {}", id, body);
        assert_eq!(body["error"], "MALFORMED_ID");
    }
}

#[actix_rt::test]
async fn test_list_runs_sorted_by_start_descending() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    create_run(&app, json!({ "name": "jan", "started_at": "2026-01-01T00:00:00Z" })).await;
    create_run(&app, json!({ "name": "mar", "started_at": "2026-03-01T00:00:00Z" })).await;
    create_run(&app, json!({ "name": "feb", "started_at": "2026-02-01T00:00:00Z" })).await;

    let (status, runs) = get_json(&app, "/api/v1/runs").await;
    assert_eq!(status, 200);
    assert_eq!(names(&runs), vec!["mar", "feb", "jan"]);

    let (_, runs) = get_json(&app, "/api/v1/runs?limit=2").await;
    assert_eq!(names(&runs), vec!["mar", "feb"]);

    let (_, runs) = get_json(&app, "/api/v1/runs?limit=500").await;
    assert_eq!(names(&runs), vec!["mar", "feb", "jan"]);
}

/// A limit outside 1..=500 is rejected instead of quietly shortened.
#[actix_rt::test]
async fn test_list_runs_rejects_out_of_range_limit() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    create_run(&app, json!({ "name": "only" })).await;

    for limit in ["0", "-1", "501", "1000"] {
        let (status, body) = get_json(&app, &format!("/api/v1/runs?limit={}", limit)).await;
        assert_eq!(status, 400, "limit {}: {}", limit, body);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("limit"));
    }
}

#[actix_rt::test]
async fn test_list_runs_filters_by_status_and_tag() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    create_run(
        &app,
        json!({ "name": "a", "status": "passed", "tags": ["nightly"], "started_at": "2026-01-01T00:00:00Z" }),
    )
    .await;
    create_run(
        &app,
        json!({ "name": "b", "status": "failed", "tags": ["nightly", "mobile"], "started_at": "2026-01-02T00:00:00Z" }),
    )
    .await;
    create_run(
        &app,
        json!({ "name": "c", "status": "passed", "tags": ["mobile"], "started_at": "2026-01-03T00:00:00Z" }),
    )
    .await;

    let (_, runs) = get_json(&app, "/api/v1/runs?status=passed").await;
    assert_eq!(names(&runs), vec!["c", "a"]);

    let (_, runs) = get_json(&app, "/api/v1/runs?tag=nightly").await;
    assert_eq!(names(&runs), vec!["b", "a"]);
    assert_eq!(runs[0]["tags"], json!(["nightly", "mobile"]));

    let (_, runs) = get_json(&app, "/api/v1/runs?tag=mobile&status=passed").await;
    assert_eq!(names(&runs), vec!["c"]);

    let (_, runs) = get_json(&app, "/api/v1/runs?tag=missing").await;
    assert!(runs.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_list_runs_rejects_unknown_status() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get_json(&app, "/api/v1/runs?status=done").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("status"));

    let (status, body) = get_json(&app, "/api/v1/runs?limit=lots").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}

/// Only supplied fields change; finished_at defaults to now.
#[actix_rt::test]
async fn test_finish_run_sets_only_supplied_fields() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let run_id = create_run(
        &app,
        json!({ "name": "R", "duration_ms": 1200, "total": 5, "passed": 4, "tags": ["keep"] }),
    )
    .await;

    let (status, run) = patch_json(
        &app,
        &format!("/api/v1/runs/{}/finish", run_id),
        json!({ "status": "failed", "failed": 1 }),
    )
    .await;

    assert_eq!(status, 200, "{}", run);
    assert_eq!(run["status"], "failed");
    assert_eq!(run["failed"], 1);
    assert_eq!(run["total"], 5);
    assert_eq!(run["passed"], 4);
    assert_eq!(run["duration_ms"], 1200);
    assert_eq!(run["tags"], json!(["keep"]));
    assert!(run["finished_at"].is_string());
}

#[actix_rt::test]
async fn test_finish_run_with_explicit_time() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let run_id = create_run(&app, json!({ "name": "R" })).await;

    let (status, run) = patch_json(
        &app,
        &format!("/api/v1/runs/{}/finish", run_id),
        json!({ "finished_at": "2026-10-17T08:30:00Z" }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(run["status"], "running");
    assert!(run["finished_at"].as_str().unwrap().starts_with("2026-10-17T08:30:00"));
}

#[actix_rt::test]
async fn test_finish_run_errors() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, _) = patch_json(
        &app,
        "/api/v1/runs/0192a7e4-3b1c-7d2e-8f00-123456789abc/finish",
        json!({ "status": "passed" }),
    )
    .await;
    assert_eq!(status, 404);

    let (status, body) = patch_json(&app, "/api/v1/runs/xyz/finish", json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "MALFORMED_ID");

    let run_id = create_run(&app, json!({ "name": "R" })).await;
    let (status, body) = patch_json(
        &app,
        &format!("/api/v1/runs/{}/finish", run_id),
        json!({ "status": "finished" }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

/// Rows holding values outside the enum still read back, as the defaults.
#[actix_rt::test]
async fn test_unknown_stored_values_read_as_defaults() {
    use sea_orm::ConnectionTrait;

    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let run_id = ingest(
        &app,
        json!({
            "name": "R",
            "status": "passed",
            "suites": [{ "name": "S", "cases": [{ "name": "c", "logs": [{ "message": "m", "level": "WARN" }] }] }]
        }),
    )
    .await;

    for sql in [
        "UPDATE test_runs SET status = 'done'",
        "UPDATE log_entries SET level = 'TRACE'",
    ] {
        pool.connection().execute_unprepared(sql).await.unwrap();
    }

    let run = run_detail(&app, &run_id).await;
    assert_eq!(run["status"], "running");
    assert_eq!(run["suites"][0]["cases"][0]["logs"][0]["level"], "INFO");
}
