// Hostname validation
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! Validation of user-supplied hostnames.
//!
//! Checks run in a fixed order and stop at the first failure, so each
//! rejection carries one specific reason: empty input, a protocol prefix,
//! a path, bad syntax, and finally a DNS lookup. The DNS gate sits behind
//! [`HostResolver`] so the syntax rules can be exercised without a network.

use crate::constants::{MAX_HOSTNAME_LEN, MAX_LABEL_LEN};
use crate::error::ValidationError;
use crate::utils::network::resolve_hostname;
use async_trait::async_trait;
use std::fmt;
use std::net::IpAddr;
use tracing::debug;

/// A hostname that passed every validation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedHost(String);

impl ValidatedHost {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidatedHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidatedHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Name lookup used as the last validation gate
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(&self, host: &str) -> anyhow::Result<Vec<IpAddr>>;
}

/// Resolver backed by the system DNS configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> anyhow::Result<Vec<IpAddr>> {
        resolve_hostname(host).await
    }
}

/// Runs the syntax checks followed by the DNS gate
pub struct HostValidator<R> {
    resolver: R,
}

impl HostValidator<SystemResolver> {
    pub fn system() -> Self {
        Self::new(SystemResolver)
    }
}

impl<R: HostResolver> HostValidator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub async fn validate(&self, raw: &str) -> Result<ValidatedHost, ValidationError> {
        let host = check_syntax(raw)?;

        match self.resolver.resolve(host).await {
            Ok(ips) => {
                debug!(host, addresses = ips.len(), "host resolved");
                Ok(ValidatedHost(host.to_string()))
            }
            Err(e) => {
                debug!(host, error = %e, "host did not resolve");
                Err(ValidationError::Unresolvable {
                    host: host.to_string(),
                })
            }
        }
    }
}

/// Every check except DNS; returns the trimmed hostname
pub fn check_syntax(raw: &str) -> Result<&str, ValidationError> {
    let host = raw.trim();

    if host.is_empty() {
        return Err(ValidationError::Empty);
    }
    if host.contains("://") {
        return Err(ValidationError::ContainsProtocol);
    }
    if host.contains('/') {
        return Err(ValidationError::ContainsPath);
    }
    if !is_valid_hostname(host) {
        return Err(ValidationError::InvalidFormat);
    }

    Ok(host)
}

/// RFC 1123 style hostname: dot-separated labels of ASCII letters, digits
/// and hyphens, no label starting or ending with a hyphen
pub fn is_valid_hostname(host: &str) -> bool {
    if host.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    host.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }

    label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
