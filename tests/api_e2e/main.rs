//! API E2E test suite.
//!
//! Drives the real actix app against a fresh in-memory SQLite database per
//! test, migrated by the same migrator the server uses.
//!
//! Run with: cargo test --test api_e2e


mod test_health;
mod test_ingest;
mod test_pipeline;
mod test_runs;
