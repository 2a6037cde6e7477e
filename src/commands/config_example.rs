// ConfigExampleCommand - Write an example configuration file
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::config::AssessConfig;
use crate::{Args, Result};
use async_trait::async_trait;

/// Writes the default configuration as TOML to the `--config-example` path
pub struct ConfigExampleCommand {
    args: Args,
}

impl ConfigExampleCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ConfigExampleCommand {
    async fn execute(&self) -> Result<()> {
        let path = self
            .args
            .config_example
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No --config-example path provided"))?;

        AssessConfig::create_example(path)?;
        println!("✓ Example configuration saved to: {}", path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ConfigExampleCommand"
    }
}
