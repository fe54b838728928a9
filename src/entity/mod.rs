//! SeaORM entity definitions for the report store.

pub mod log_entry;
pub mod test_case;
pub mod test_run;
pub mod test_run_tag;
pub mod test_suite;
