// labscan - Terminal Output Module
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! Human-readable rendering of a finished assessment.
//!
//! Endpoints are printed in the order the service returned them. An
//! endpoint that is not `Ready` contributes its IP and status message only;
//! its details are never read.

use crate::client::{AssessmentStatus, Details, Endpoint, Report};
use crate::constants::EXPIRY_DATE_FORMAT;
use chrono::{Local, TimeZone, Utc};
use colored::*;
use std::fmt;

/// Time zone used for certificate expiry dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateDisplay {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub color: bool,
    pub dates: DateDisplay,
}

/// Formats reports for the terminal
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    options: RenderOptions,
}

impl ReportRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, report: &Report) -> String {
        self.display(report).to_string()
    }

    /// Lazily formatted view, for writing straight to a stream
    pub fn display<'a>(&'a self, report: &'a Report) -> RenderedReport<'a> {
        RenderedReport {
            renderer: self,
            report,
        }
    }

    fn check_label(&self, ok: bool) -> String {
        let label = if ok { "OK" } else { "VULNERABLE" };
        match (self.options.color, ok) {
            (false, _) => label.to_string(),
            (true, true) => label.green().to_string(),
            (true, false) => label.red().bold().to_string(),
        }
    }

    fn grade(&self, grade: &str) -> String {
        if !self.options.color {
            return grade.to_string();
        }
        match grade.chars().next() {
            Some('A') => grade.green().bold().to_string(),
            Some('B') => grade.blue().bold().to_string(),
            Some('C' | 'D' | 'E') => grade.yellow().to_string(),
            Some('F' | 'T' | 'M') => grade.red().bold().to_string(),
            _ => grade.to_string(),
        }
    }

    fn write_endpoint(&self, f: &mut fmt::Formatter<'_>, endpoint: &Endpoint) -> fmt::Result {
        writeln!(f, "IP: {}", endpoint.ip_address)?;

        if !endpoint.is_ready() {
            writeln!(f, "  Status: {}", endpoint.status_message)?;
            return writeln!(f);
        }

        writeln!(f, "  Grade: {}", self.grade(&endpoint.grade))?;

        if endpoint.has_warnings {
            let warning = "Warnings present";
            if self.options.color {
                writeln!(f, "  {}", warning.yellow())?;
            } else {
                writeln!(f, "  {}", warning)?;
            }
        }

        if let Some(details) = endpoint.ready_details() {
            self.write_details(f, details)?;
        }

        writeln!(f)
    }

    fn write_details(&self, f: &mut fmt::Formatter<'_>, details: &Details) -> fmt::Result {
        let protocols: Vec<String> = details.protocols.iter().map(|p| p.to_string()).collect();
        writeln!(f, "  Protocols: {}", protocols.join("  "))?;

        writeln!(
            f,
            "  Forward Secrecy: {}",
            self.check_label(details.has_forward_secrecy())
        )?;
        writeln!(f, "  Heartbleed: {}", self.check_label(!details.heartbleed))?;
        writeln!(f, "  POODLE: {}", self.check_label(!details.poodle))?;
        writeln!(f, "  Logjam: {}", self.check_label(!details.logjam))?;

        if let Some(cn) = details.cert.primary_common_name() {
            writeln!(f, "  Cert CN: {}", cn)?;
        }
        if !details.cert.alt_names.is_empty() {
            writeln!(f, "  Cert SANs: {}", details.cert.alt_names.join(", "))?;
        }

        writeln!(
            f,
            "  Cert expires: {}",
            format_expiry(details.cert.not_after, self.options.dates)
        )
    }
}

/// A report bound to a renderer, formatted on demand
pub struct RenderedReport<'a> {
    renderer: &'a ReportRenderer,
    report: &'a Report,
}

impl fmt::Display for RenderedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nFinal results:\n")?;

        if self.report.status == AssessmentStatus::Error {
            let message = format!("Assessment failed: {}", self.report.status_message);
            if self.renderer.options.color {
                writeln!(f, "{}\n", message.red().bold())?;
            } else {
                writeln!(f, "{}\n", message)?;
            }
        }

        for endpoint in &self.report.endpoints {
            self.renderer.write_endpoint(f, endpoint)?;
        }

        Ok(())
    }
}

/// Convert epoch milliseconds to a `YYYY-MM-DD` date
pub fn format_expiry(not_after_ms: i64, dates: DateDisplay) -> String {
    let formatted = match dates {
        DateDisplay::Local => Local
            .timestamp_millis_opt(not_after_ms)
            .single()
            .map(|dt| dt.format(EXPIRY_DATE_FORMAT).to_string()),
        DateDisplay::Utc => Utc
            .timestamp_millis_opt(not_after_ms)
            .single()
            .map(|dt| dt.format(EXPIRY_DATE_FORMAT).to_string()),
    };

    formatted.unwrap_or_else(|| "unknown".to_string())
}
