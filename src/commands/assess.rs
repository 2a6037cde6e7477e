// AssessCommand - Single host SSL Labs assessment
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::assessment::Assessor;
use crate::client::{LabsClient, Report};
use crate::config::AssessConfig;
use crate::input::{HostResolver, HostValidator, prompt_for_host};
use crate::output::{ReportRenderer, json};
use crate::{Args, Result};
use anyhow::Context;
use async_trait::async_trait;
use std::io::{BufRead, BufReader, IsTerminal, Write};
use tracing::info;

/// AssessCommand runs the whole workflow for one host
///
/// This command is responsible for:
/// - Taking the host from the command line or prompting for it
/// - Submitting a fresh assessment and polling until it finishes
/// - Rendering the final report
/// - Exporting it to JSON if requested
pub struct AssessCommand {
    args: Args,
}

impl AssessCommand {
    /// Create a new AssessCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Run against explicit streams and resolver; returns the final report
    pub async fn run<V, R, W>(
        &self,
        validator: &HostValidator<V>,
        input: &mut R,
        out: &mut W,
        is_terminal: bool,
    ) -> Result<Report>
    where
        V: HostResolver,
        R: BufRead,
        W: Write,
    {
        let config = AssessConfig::resolve(&self.args)?;

        if !self.args.output.quiet {
            display_banner(out)?;
        }

        let host = match &self.args.target {
            Some(target) => validator
                .validate(target)
                .await
                .with_context(|| format!("Invalid host '{}'", target.trim()))?,
            None => prompt_for_host(input, out, validator).await?,
        };

        writeln!(out, "Starting SSL Labs assessment for: {}", host)?;
        info!(host = %host, api_url = %config.api_url, "starting assessment");

        let client = LabsClient::new(&config.client_config())?;
        let assessor = Assessor::new(client, config.poll_interval());
        let report = assessor.assess(host.as_str(), out).await?;

        let renderer = ReportRenderer::new(config.render_options(is_terminal));
        write!(out, "{}", renderer.display(&report))?;

        if let Some(json_path) = &self.args.output.json {
            json::write_json_file(&report, json_path, self.args.output.json_pretty)?;
            writeln!(out, "✓ Report exported to JSON: {}", json_path.display())?;
        }

        Ok(report)
    }
}

#[async_trait]
impl Command for AssessCommand {
    async fn execute(&self) -> Result<()> {
        let mut input = BufReader::new(std::io::stdin());
        let mut out = std::io::stdout();
        let is_terminal = out.is_terminal();

        self.run(&HostValidator::system(), &mut input, &mut out, is_terminal)
            .await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "AssessCommand"
    }
}

fn display_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "labscan v{} - SSL Labs TLS assessment client\n",
        env!("CARGO_PKG_VERSION")
    )
}
