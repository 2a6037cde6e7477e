// Assessment report models
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! Typed view of the `/analyze` response.
//!
//! Field names follow the API's camelCase JSON. Unknown fields are ignored
//! and missing or `null` ones fall back to their zero value, so partial responses
//! returned while an assessment is still running decode cleanly.

use crate::constants::ENDPOINT_READY;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One assessment run for a hostname
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    #[serde(deserialize_with = "nullable")]
    pub host: String,
    pub status: AssessmentStatus,
    #[serde(deserialize_with = "nullable")]
    pub status_message: String,
    #[serde(deserialize_with = "nullable")]
    pub endpoints: Vec<Endpoint>,
}

/// Assessment status as reported by the service
///
/// Only `READY` and `ERROR` are interpreted; every other value (`DNS`,
/// `IN_PROGRESS`, ...) is carried verbatim and treated as still running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum AssessmentStatus {
    Ready,
    Error,
    Pending(String),
}

impl AssessmentStatus {
    /// Polling stops once a terminal status is seen
    pub fn is_terminal(&self) -> bool {
        matches!(self, AssessmentStatus::Ready | AssessmentStatus::Error)
    }

    pub fn as_str(&self) -> &str {
        match self {
            AssessmentStatus::Ready => "READY",
            AssessmentStatus::Error => "ERROR",
            AssessmentStatus::Pending(raw) => raw,
        }
    }
}

impl Default for AssessmentStatus {
    fn default() -> Self {
        AssessmentStatus::Pending(String::new())
    }
}

impl From<String> for AssessmentStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "READY" => AssessmentStatus::Ready,
            "ERROR" => AssessmentStatus::Error,
            _ => AssessmentStatus::Pending(raw),
        }
    }
}

impl From<Option<String>> for AssessmentStatus {
    fn from(raw: Option<String>) -> Self {
        raw.unwrap_or_default().into()
    }
}

impl From<AssessmentStatus> for String {
    fn from(status: AssessmentStatus) -> Self {
        match status {
            AssessmentStatus::Pending(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One assessed IP address behind the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoint {
    #[serde(deserialize_with = "nullable")]
    pub ip_address: String,
    #[serde(deserialize_with = "nullable")]
    pub status_message: String,
    #[serde(deserialize_with = "nullable")]
    pub grade: String,
    #[serde(deserialize_with = "nullable")]
    pub has_warnings: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

impl Endpoint {
    /// Whether this endpoint finished and its details can be read
    pub fn is_ready(&self) -> bool {
        self.status_message == ENDPOINT_READY
    }

    /// Details, but only when the endpoint itself is ready
    pub fn ready_details(&self) -> Option<&Details> {
        if self.is_ready() {
            self.details.as_ref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Details {
    #[serde(deserialize_with = "nullable")]
    pub protocols: Vec<Protocol>,
    /// Bitmask; zero means forward secrecy was never negotiated
    #[serde(deserialize_with = "nullable")]
    pub forward_secrecy: i64,
    #[serde(deserialize_with = "nullable")]
    pub heartbleed: bool,
    #[serde(deserialize_with = "nullable")]
    pub poodle: bool,
    #[serde(deserialize_with = "nullable")]
    pub logjam: bool,
    #[serde(deserialize_with = "nullable")]
    pub cert: Cert,
}

impl Details {
    pub fn has_forward_secrecy(&self) -> bool {
        self.forward_secrecy > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Protocol {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub version: String,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cert {
    #[serde(deserialize_with = "nullable")]
    pub common_names: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub alt_names: Vec<String>,
    /// Expiry as epoch milliseconds
    #[serde(deserialize_with = "nullable")]
    pub not_after: i64,
}

impl Cert {
    pub fn primary_common_name(&self) -> Option<&str> {
        self.common_names.first().map(String::as_str)
    }
}

/// Treat an explicit JSON `null` like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
