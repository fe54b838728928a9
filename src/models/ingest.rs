//! Nested ingestion payload: a run with its suites, cases and logs.

use serde::Deserialize;
use utoipa::ToSchema;

use super::case::CaseInput;
use super::log_entry::LogInput;
use super::run::RunInput;
use super::suite::SuiteInput;

/// Body of `POST /ingest`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct IngestRunRequest {
    #[serde(flatten)]
    pub run: RunInput,
    #[serde(default)]
    pub suites: Vec<IngestSuite>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct IngestSuite {
    #[serde(flatten)]
    pub suite: SuiteInput,
    #[serde(default)]
    pub cases: Vec<IngestCase>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct IngestCase {
    #[serde(flatten)]
    pub case: CaseInput,
    /// Parent ids inside nested logs are ignored; the pipeline assigns them.
    #[serde(default)]
    pub logs: Vec<LogInput>,
}
