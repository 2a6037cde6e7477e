// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Parser;
use std::path::PathBuf;

mod connection_args;
mod output_args;

pub use connection_args::ConnectionArgs;
pub use output_args::OutputArgs;

/// labscan - SSL Labs assessment client
///
/// Submits a hostname to the SSL Labs API, polls until the assessment is
/// finished and prints grade, protocols, vulnerability checks and
/// certificate details for every endpoint.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version)]
#[command(name = "labscan")]
#[command(about = "Query the SSL Labs API and summarize a host's TLS assessment", long_about = None)]
pub struct Args {
    /// Host to assess (prompted for when omitted)
    #[arg(value_name = "HOST")]
    pub target: Option<String>,

    /// Configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write an example configuration file and exit
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,

    // ============ API Connection and Polling ============
    #[command(flatten)]
    pub connection: ConnectionArgs,

    // ============ Output Formats and Display ============
    #[command(flatten)]
    pub output: OutputArgs,
}
