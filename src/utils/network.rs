// Network utilities - DNS resolution

use anyhow::{Context, Result};
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::*;
use std::net::IpAddr;
use tracing::debug;

/// Resolve hostname to IP addresses
///
/// Uses the system resolver configuration when it can be read, otherwise
/// hickory's defaults.
pub async fn resolve_hostname(hostname: &str) -> Result<Vec<IpAddr>> {
    // Check if it's already an IP address
    if let Ok(ip) = hostname.parse::<IpAddr>() {
        return Ok(vec![ip]);
    }

    let resolver = TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
        debug!("System resolver configuration unavailable ({}), using defaults", e);
        TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
    });

    let response = resolver
        .lookup_ip(hostname)
        .await
        .context("DNS lookup failed")?;

    let ips: Vec<IpAddr> = response.iter().collect();

    if ips.is_empty() {
        anyhow::bail!("No IP addresses found for {}", hostname);
    }

    Ok(ips)
}
