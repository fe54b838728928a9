//! Test run report server library.
//!
//! Ingests automated test runs (runs, suites, cases and log entries),
//! keeps their roll-up counters, and serves them back as one assembled tree.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
