//! Execution status and log level enums shared by all entities.

use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

/// Execution status of a run, suite or case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    /// Still executing (default for new records).
    #[default]
    Running,
    Passed,
    Failed,
    Skipped,
    /// Could not execute because of an external precondition.
    Blocked,
}

impl ExecutionStatus {
    /// Allowed string values, in declaration order.
    pub const ALLOWED: &'static [&'static str] = &["running", "passed", "failed", "skipped", "blocked"];

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::Blocked => "blocked",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "running" => Some(Self::Running),
            "passed" => Some(Self::Passed),
            "failed" => Some(Self::Failed),
            "skipped" => Some(Self::Skipped),
            "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }

    /// Read a status column. Values outside the allowed set fall back to the
    /// default and are logged.
    pub fn from_stored(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            warn!("Unknown stored status {:?}, reading as {}", raw, Self::default());
            Self::default()
        })
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity (or kind) of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
    Debug,
    /// A test step marker rather than a message.
    Step,
}

impl LogLevel {
    pub const ALLOWED: &'static [&'static str] = &["INFO", "WARN", "ERROR", "DEBUG", "STEP"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
            Self::Step => "STEP",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "INFO" => Some(Self::Info),
            "WARN" => Some(Self::Warn),
            "ERROR" => Some(Self::Error),
            "DEBUG" => Some(Self::Debug),
            "STEP" => Some(Self::Step),
            _ => None,
        }
    }

    pub fn from_stored(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            warn!("Unknown stored log level {:?}, reading as {}", raw, Self::default());
            Self::default()
        })
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
