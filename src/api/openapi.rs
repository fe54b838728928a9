//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Test Run Report Server",
        version = "0.1.0",
        description = "API server for ingesting automated test runs (runs, suites, cases, logs) and reading them back as one tree"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Run endpoints
        api::runs::create_run,
        api::runs::list_runs,
        api::runs::get_run_detail,
        api::runs::finish_run,
        api::runs::create_suite,
        // Case and log endpoints
        api::children::create_case,
        api::children::add_log,
        // Ingestion
        api::ingest::ingest,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            models::RecordId,
            models::CreatedResponse,
            models::ExecutionStatus,
            models::LogLevel,
            models::SuiteCounts,
            models::RunCounts,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Runs
            models::RunInput,
            models::FinishRunRequest,
            models::ListRunsQuery,
            models::RunResponse,
            models::RunDetail,
            // Suites
            models::SuiteInput,
            models::CreateSuiteRequest,
            models::SuiteResponse,
            models::SuiteDetail,
            // Cases
            models::CaseInput,
            models::CreateCaseRequest,
            models::CaseResponse,
            models::CaseDetail,
            // Logs
            models::LogInput,
            models::CreateLogRequest,
            models::LogEntryResponse,
            // Ingestion
            models::IngestRunRequest,
            models::IngestSuite,
            models::IngestCase,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Runs", description = "Run creation, listing, retrieval and completion"),
        (name = "Cases", description = "Cases and log entries added one at a time"),
        (name = "Ingest", description = "Nested ingestion of a whole run tree")
    )
)]
pub struct ApiDoc;
