// SSL Labs HTTP client
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{AssessmentApi, ClientConfig, Report};
use crate::error::ClientError;
use async_trait::async_trait;
use tracing::{debug, trace};
use url::{Host, Url};

/// HTTP client for the `/analyze` endpoint
pub struct LabsClient {
    client: reqwest::Client,
    analyze_endpoint: Url,
}

impl LabsClient {
    /// Build a client; fails if the base URL does not parse or the HTTP
    /// client cannot be initialised
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let analyze_endpoint = Url::parse(&format!(
            "{}/analyze",
            config.api_url.trim_end_matches('/')
        ))?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("labscan/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        // Proxies from the environment never apply to a local API
        if is_loopback(&analyze_endpoint) {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build().map_err(ClientError::Build)?,
            analyze_endpoint,
        })
    }

    /// URL for one `/analyze` call: `host`, `all=done`, and `startNew=on`
    /// when a fresh assessment is wanted
    pub fn analyze_url(&self, host: &str, start_new: bool) -> Url {
        let mut url = self.analyze_endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("host", host).append_pair("all", "done");
            if start_new {
                query.append_pair("startNew", "on");
            }
        }
        url
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

#[async_trait]
impl AssessmentApi for LabsClient {
    async fn analyze(&self, host: &str, start_new: bool) -> Result<Report, ClientError> {
        let url = self.analyze_url(host, start_new);
        debug!(%url, start_new, "requesting assessment");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http(status.as_u16()));
        }

        let body = response.text().await?;
        trace!(%body, "assessment response body");

        Ok(serde_json::from_str(&body)?)
    }
}
