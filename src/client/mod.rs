// Assessment API client
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

mod labs;
pub mod models;

pub use labs::LabsClient;
pub use models::{AssessmentStatus, Cert, Details, Endpoint, Protocol, Report};

use crate::constants::DEFAULT_API_URL;
use crate::error::ClientError;
use async_trait::async_trait;
use std::time::Duration;

/// Anything that can answer an `/analyze` request
///
/// The poll loop only depends on this trait, so any service speaking the
/// same JSON shape (or a scripted fake in tests) can stand in for SSL Labs.
#[async_trait]
pub trait AssessmentApi: Send + Sync {
    /// Fetch the current report for `host`. With `start_new` the service is
    /// asked to discard any cached result and begin a fresh assessment.
    async fn analyze(&self, host: &str, start_new: bool) -> Result<Report, ClientError>;
}

/// Connection settings for [`LabsClient`]
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API base, e.g. `https://api.ssllabs.com/api/v2`
    pub api_url: String,
    /// Per-request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

#[async_trait]
impl<T: AssessmentApi + ?Sized> AssessmentApi for &T {
    async fn analyze(&self, host: &str, start_new: bool) -> Result<Report, ClientError> {
        (**self).analyze(host, start_new).await
    }
}
