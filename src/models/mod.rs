//! Domain models for the test run report server.

pub mod case;
pub mod counts;
pub mod detail;
pub mod ingest;
pub mod log_entry;
pub mod record_id;
pub mod records;
pub mod run;
pub mod status;
pub mod suite;

// Re-export commonly used types
pub use case::{CaseInput, CaseResponse, CreateCaseRequest};
pub use counts::{RunCounts, SuiteCounts};
pub use detail::{CaseDetail, RunDetail, SuiteDetail};
pub use ingest::{IngestCase, IngestRunRequest, IngestSuite};
pub use log_entry::{CreateLogRequest, LogEntryResponse, LogInput};
pub use record_id::RecordId;
pub use records::{CaseRecord, LogRecord, RunFilter, RunRecord, RunUpdate, SuiteRecord};
pub use run::{CreatedResponse, FinishRunRequest, ListRunsQuery, RunInput, RunResponse};
pub use status::{ExecutionStatus, LogLevel};
pub use suite::{CreateSuiteRequest, SuiteInput, SuiteResponse};
