// # HTTP IP Resolver
//
// This crate resolves the caller's public IPv4 address by asking an external
// IP-echo service over HTTP.
//
// ## Behavior
//
// One GET per resolve() call. The full response body, trimmed of surrounding
// whitespace, is the candidate address; it must validate as a dotted quad
// (see `gddns_core::PublicIp`). Anything else, including transport failures,
// is an IP resolution error, which the reconciler treats as fatal.
//
// ## Services
//
// Any service that echoes the address as plain text works. Known candidates:
// - http://ip.42.pl/raw (default)
// - https://api.ipify.org
// - https://icanhazip.com

use async_trait::async_trait;
use std::time::Duration;

use gddns_core::config::{DEFAULT_IP_URL, DEFAULT_TIMEOUT_SECS};
use gddns_core::error::{Error, Result};
use gddns_core::traits::{IpResolver, PublicIp};

/// HTTP-based public IP resolver
#[derive(Debug, Clone)]
pub struct HttpIpResolver {
    /// URL of the IP-echo service
    url: String,

    /// HTTP client, carries the request timeout
    client: reqwest::Client,
}

impl HttpIpResolver {
    /// Create a resolver for the given IP-echo service URL
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Resolver against the default echo service with the default timeout
    pub fn default_service() -> Self {
        Self::new(DEFAULT_IP_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

#[async_trait]
impl IpResolver for HttpIpResolver {
    async fn resolve(&self) -> Result<PublicIp> {
        tracing::debug!(url = %self.url, "querying IP-echo service");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::ip_resolution(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::ip_resolution(format!(
                "IP service answered {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::ip_resolution(format!("failed to read response: {}", e)))?;

        PublicIp::parse(body.trim())
    }
}
