//! Run API handlers: create, list, fetch the assembled tree, finish.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    CreateSuiteRequest, CreatedResponse, FinishRunRequest, ListRunsQuery, RecordId, RunDetail,
    RunInput, RunResponse,
};
use crate::services::{assemble_run_detail, records};

/// Create a run without children.
#[utoipa::path(
    post,
    path = "/api/v1/runs",
    tag = "Runs",
    request_body = RunInput,
    responses(
        (status = 201, description = "Run created", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_run(
    pool: web::Data<DbPool>,
    body: web::Json<RunInput>,
) -> AppResult<HttpResponse> {
    let run = records::create_run(&pool, &body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id: run.id }))
}

/// List runs, most recently started first.
#[utoipa::path(
    get,
    path = "/api/v1/runs",
    tag = "Runs",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum runs returned (default 50, 1..=500)"),
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("tag" = Option<String>, Query, description = "Only runs carrying this tag")
    ),
    responses(
        (status = 200, description = "Runs", body = Vec<RunResponse>),
        (status = 400, description = "Invalid status filter", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_runs(
    pool: web::Data<DbPool>,
    query: web::Query<ListRunsQuery>,
) -> AppResult<HttpResponse> {
    let runs = records::list_runs(&pool, &query).await?;
    Ok(HttpResponse::Ok().json(runs))
}

/// Get a run with its suites, cases and logs.
#[utoipa::path(
    get,
    path = "/api/v1/runs/{run_id}",
    tag = "Runs",
    params(
        ("run_id" = String, Path, description = "Run id")
    ),
    responses(
        (status = 200, description = "Assembled run", body = RunDetail),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 404, description = "Run not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_run_detail(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let run_id = RecordId::parse(&path.into_inner())?;
    let detail = assemble_run_detail(&pool, run_id).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Finish a run. Only the supplied fields change.
#[utoipa::path(
    patch,
    path = "/api/v1/runs/{run_id}/finish",
    tag = "Runs",
    params(
        ("run_id" = String, Path, description = "Run id")
    ),
    request_body = FinishRunRequest,
    responses(
        (status = 200, description = "Updated run", body = RunResponse),
        (status = 400, description = "Malformed id or invalid field", body = crate::error::ErrorResponse),
        (status = 404, description = "Run not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn finish_run(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
    body: web::Json<FinishRunRequest>,
) -> AppResult<HttpResponse> {
    let run_id = RecordId::parse(&path.into_inner())?;
    let run = records::finish_run(&pool, run_id, &body).await?;
    Ok(HttpResponse::Ok().json(run))
}

/// Add a suite to a run.
#[utoipa::path(
    post,
    path = "/api/v1/runs/{run_id}/suites",
    tag = "Runs",
    params(
        ("run_id" = String, Path, description = "Run id")
    ),
    request_body = CreateSuiteRequest,
    responses(
        (status = 201, description = "Suite created", body = CreatedResponse),
        (status = 400, description = "Validation failed or run_id mismatch", body = crate::error::ErrorResponse),
        (status = 404, description = "Run not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_suite(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
    body: web::Json<CreateSuiteRequest>,
) -> AppResult<HttpResponse> {
    let run_id = RecordId::parse(&path.into_inner())?;
    let suite = records::create_suite(&pool, run_id, &body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id: suite.id }))
}

/// Configure run routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/runs")
            .route(web::post().to(create_run))
            .route(web::get().to(list_runs)),
    )
    .service(web::resource("/runs/{run_id}").route(web::get().to(get_run_detail)))
    .service(web::resource("/runs/{run_id}/finish").route(web::patch().to(finish_run)))
    .service(web::resource("/runs/{run_id}/suites").route(web::post().to(create_suite)));
}
