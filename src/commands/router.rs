// CommandRouter - Routes CLI arguments to appropriate Command
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{AssessCommand, Command, ConfigExampleCommand};
use crate::error::ConfigError;
use crate::{Args, Result};

/// Picks the command to run from parsed arguments
///
/// `--config-example` takes priority; everything else is an assessment.
pub struct CommandRouter;

impl CommandRouter {
    pub fn route(args: Args) -> Result<Box<dyn Command>> {
        if args.config_example.is_some() {
            return Ok(Box::new(ConfigExampleCommand::new(args)));
        }

        Ok(Box::new(AssessCommand::new(args)))
    }

    /// Reject argument combinations that cannot be honoured
    pub fn validate_routing(args: &Args) -> Result<()> {
        if args.config_example.is_some() && args.target.is_some() {
            return Err(ConfigError::InvalidInput {
                message: "Cannot combine --config-example with a target host".to_string(),
            }
            .into());
        }

        if args.output.json_pretty && args.output.json.is_none() {
            return Err(ConfigError::InvalidInput {
                message: "--json-pretty requires --json FILE".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
