// API connection and polling arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;

/// API connection and polling options
///
/// Each value overrides the configuration file when given.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Assessment API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Seconds to wait between status polls (default: 10)
    #[arg(long = "poll-interval", value_name = "SECONDS")]
    pub poll_interval: Option<u64>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<u64>,
}
