// labscan - SSL Labs assessment client
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use anyhow::Result;
use clap::Parser;
use labscan::Args;
use labscan::commands::{Command, CommandRouter};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable.
    // Stdout carries the report, so logs go to stderr.
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let args = Args::parse();
    CommandRouter::validate_routing(&args)?;

    let command = CommandRouter::route(args)?;
    debug!(command = command.name(), "dispatching command");

    command.execute().await
}
