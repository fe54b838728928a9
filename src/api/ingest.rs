//! Nested ingestion endpoint.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{CreatedResponse, IngestRunRequest};
use crate::services::ingest_run;

/// Ingest a complete run tree in one call.
///
/// Validation errors name the offending field by its path in the payload,
/// e.g. `suites[0].cases[1].status`. Nothing is stored when any record fails.
#[utoipa::path(
    post,
    path = "/api/v1/ingest",
    tag = "Ingest",
    request_body = IngestRunRequest,
    responses(
        (status = 201, description = "Run tree stored", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
        (status = 503, description = "Store unavailable", body = crate::error::ErrorResponse),
    )
)]
pub async fn ingest(
    pool: web::Data<DbPool>,
    body: web::Json<IngestRunRequest>,
) -> AppResult<HttpResponse> {
    let outcome = ingest_run(&pool, &body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id: outcome.run_id }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ingest").route(web::post().to(ingest)));
}
