// labscan - SSL Labs assessment client
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! labscan submits a hostname to the SSL Labs assessment API, polls until
//! the assessment finishes and prints a summary of grade, protocol support,
//! known-vulnerability checks and certificate details for every endpoint.

pub mod assessment;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use crate::assessment::Assessor;
pub use crate::cli::Args;
pub use crate::client::{AssessmentApi, LabsClient, Report};
pub use crate::error::{ClientError, ConfigError, ValidationError};
pub use crate::output::ReportRenderer;

/// Result type for labscan operations
pub type Result<T> = anyhow::Result<T>;

/// Error type for labscan operations
pub use anyhow::Error;
