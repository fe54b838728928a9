//! Business logic services.

pub mod aggregator;
pub mod assembler;
pub mod ingestion;
pub mod records;
pub mod validator;

pub use assembler::assemble_run_detail;
pub use ingestion::{IngestOutcome, ingest_run};
