//! Opaque record identifiers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;

/// Identifier of a stored run, suite, case or log entry.
///
/// Clients only ever see the string form. Internally it wraps the store's
/// native UUIDv7 key, which keeps ids time-ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ToSchema)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh, time-ordered identifier.
    pub fn generate() -> Self {
        RecordId(Uuid::now_v7())
    }

    /// Parse a client supplied identifier.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        Uuid::parse_str(s.trim())
            .map(RecordId)
            .map_err(|_| AppError::MalformedId(s.to_string()))
    }

    /// The store key behind this id.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        RecordId(id)
    }
}

impl FromStr for RecordId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RecordId::parse(&raw).map_err(serde::de::Error::custom)
    }
}
