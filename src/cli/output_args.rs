// Output format configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Output format and display options
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Also write the final report to a JSON file
    #[arg(long = "json", value_name = "FILE", id = "output_json")]
    pub json: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long = "json-pretty")]
    pub json_pretty: bool,

    /// Quiet mode (no banner)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color", alias = "no-colour")]
    pub no_color: bool,

    /// Show certificate expiry dates in UTC instead of local time
    #[arg(long = "utc")]
    pub utc: bool,
}
