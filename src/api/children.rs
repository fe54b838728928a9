//! Handlers that attach cases to suites and log entries to cases.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{CreateCaseRequest, CreateLogRequest, CreatedResponse, RecordId};
use crate::services::records;

/// Add a case to a suite.
#[utoipa::path(
    post,
    path = "/api/v1/suites/{suite_id}/cases",
    tag = "Cases",
    params(
        ("suite_id" = String, Path, description = "Suite id")
    ),
    request_body = CreateCaseRequest,
    responses(
        (status = 201, description = "Case created", body = CreatedResponse),
        (status = 400, description = "Validation failed or parent mismatch", body = crate::error::ErrorResponse),
        (status = 404, description = "Suite not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_case(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
    body: web::Json<CreateCaseRequest>,
) -> AppResult<HttpResponse> {
    let suite_id = RecordId::parse(&path.into_inner())?;
    let case = records::create_case(&pool, suite_id, &body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id: case.id }))
}

/// Append a log entry to a case.
#[utoipa::path(
    post,
    path = "/api/v1/cases/{case_id}/logs",
    tag = "Cases",
    params(
        ("case_id" = String, Path, description = "Case id")
    ),
    request_body = CreateLogRequest,
    responses(
        (status = 201, description = "Log entry created", body = CreatedResponse),
        (status = 400, description = "Validation failed or parent mismatch", body = crate::error::ErrorResponse),
        (status = 404, description = "Case not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn add_log(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
    body: web::Json<CreateLogRequest>,
) -> AppResult<HttpResponse> {
    let case_id = RecordId::parse(&path.into_inner())?;
    let log = records::add_log(&pool, case_id, &body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id: log.id }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/suites/{suite_id}/cases").route(web::post().to(create_case)))
        .service(web::resource("/cases/{case_id}/logs").route(web::post().to(add_log)));
}
