// Interactive host prompt
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::hostname::{HostResolver, HostValidator, ValidatedHost};
use crate::Result;
use crate::constants::SUGGESTED_HOST;
use std::io::{BufRead, Write};
use tracing::warn;

/// Ask for a host until one validates
///
/// There is no attempt limit. The loop only ends early when `input` is
/// exhausted, which is reported as an error.
pub async fn prompt_for_host<R, W, V>(
    input: &mut R,
    output: &mut W,
    validator: &HostValidator<V>,
) -> Result<ValidatedHost>
where
    R: BufRead,
    W: Write,
    V: HostResolver,
{
    let mut raw = Vec::new();

    loop {
        writeln!(output, "If you don't know a host use {}", SUGGESTED_HOST)?;
        write!(output, "Enter host: ")?;
        output.flush()?;

        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            anyhow::bail!("no host entered: input closed");
        }
        // Undecodable bytes become U+FFFD and fail the hostname check
        let line = String::from_utf8_lossy(&raw);

        match validator.validate(&line).await {
            Ok(host) => return Ok(host),
            Err(e) => {
                warn!(input = line.trim(), reason = %e, "rejected host");
                writeln!(output, "Invalid host: {}", e)?;
                writeln!(output, "Please try again.\n")?;
            }
        }
    }
}
