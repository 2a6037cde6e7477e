// Configuration
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! Settings for one run, layered as defaults < config file < CLI flags.
//!
//! The focused config objects handed to the client, the poll loop and the
//! renderer are derived from [`AssessConfig`] so none of them depend on the
//! full argument struct.

use crate::cli::Args;
use crate::client::ClientConfig;
use crate::constants::{DEFAULT_API_URL, DEFAULT_POLL_INTERVAL};
use crate::error::ConfigError;
use crate::output::{DateDisplay, RenderOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessConfig {
    /// Assessment API base URL
    pub api_url: String,

    /// Seconds between status polls
    pub poll_interval_seconds: u64,

    /// Per-request timeout in seconds; unset means no explicit timeout
    pub request_timeout_seconds: Option<u64>,

    /// Show certificate expiry in UTC rather than local time
    pub utc_dates: bool,

    /// Colored terminal output
    pub color: bool,
}

impl Default for AssessConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            poll_interval_seconds: DEFAULT_POLL_INTERVAL.as_secs(),
            request_timeout_seconds: None,
            utc_dates: false,
            color: true,
        }
    }
}

impl AssessConfig {
    /// Create config from file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Create example config file
    pub fn create_example(path: &Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, toml).map_err(|source| ConfigError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config file named in `args` (if any), then apply flag overrides
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    /// Command-line flags win over file values
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(url) = &args.connection.api_url {
            self.api_url = url.clone();
        }
        if let Some(interval) = args.connection.poll_interval {
            self.poll_interval_seconds = interval;
        }
        if let Some(timeout) = args.connection.timeout {
            self.request_timeout_seconds = Some(timeout);
        }
        if args.output.utc {
            self.utc_dates = true;
        }
        if args.output.no_color {
            self.color = false;
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            timeout: self.request_timeout_seconds.map(Duration::from_secs),
        }
    }

    /// Render options; color also requires an interactive terminal
    pub fn render_options(&self, is_terminal: bool) -> RenderOptions {
        RenderOptions {
            color: self.color && is_terminal,
            dates: if self.utc_dates {
                DateDisplay::Utc
            } else {
                DateDisplay::Local
            },
        }
    }
}
