// labscan - SSL Labs assessment client
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! Shared constants for the assessment workflow.

use std::time::Duration;

/// Default SSL Labs API v2 base URL
pub const DEFAULT_API_URL: &str = "https://api.ssllabs.com/api/v2";

/// Default interval between status polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Host suggested to users who have nothing to test
pub const SUGGESTED_HOST: &str = "www.ssllabs.com";

/// Endpoint status message meaning its detail data is usable
pub const ENDPOINT_READY: &str = "Ready";

/// Maximum total hostname length (RFC 1035)
pub const MAX_HOSTNAME_LEN: usize = 253;

/// Maximum length of a single DNS label (RFC 1035)
pub const MAX_LABEL_LEN: usize = 63;

/// Date format used for certificate expiry
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";
