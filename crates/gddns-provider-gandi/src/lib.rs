// # Gandi LiveDNS Record Client
//
// This crate implements `RecordClient` against the Gandi LiveDNS v5 REST API.
//
// ## API Reference
//
// - Base URL: https://dns.api.gandi.net/api/v5
// - Read rrset:  GET `/zones/:zone/records/:name/:type`
// - Write rrset: PUT `/zones/:zone/records/:name/:type`
//   with body `{"rrset_values": [value], "rrset_ttl": ttl}`
// - Credential: `X-Api-Key` header on every request
// - A successful write answers `201 Created`
//
// ## Behavior
//
// One HTTP request per call, no retries, no caching. The write hands the
// provider's status code and body back verbatim; the success policy (201 or
// bust) belongs to the reconciler. The record model supports multiple values
// per rrset, but this client only ever reads and writes a single value.
//
// ## Security
//
// The API key never appears in logs; the `Debug` implementation redacts it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use gddns_core::config::UpdaterConfig;
use gddns_core::error::{Error, Result};
use gddns_core::traits::{RecordClient, RecordRef, UpdateResponse};

/// Name of the credential header Gandi expects
const API_KEY_HEADER: &str = "X-Api-Key";

/// Gandi LiveDNS record client
pub struct GandiRecordClient {
    /// API base URL (configurable for tests and staging)
    api_url: String,

    /// API key, sent as `X-Api-Key`. Never log this value.
    api_key: String,

    /// TTL (seconds) submitted with every write
    ttl: u32,

    /// HTTP client, carries the request timeout
    client: reqwest::Client,
}

// The Debug implementation hides the API key.
impl std::fmt::Debug for GandiRecordClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GandiRecordClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"<REDACTED>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Body of a PUT on an rrset endpoint
#[derive(Debug, Serialize)]
struct RrsetPayload<'a> {
    rrset_values: [&'a str; 1],
    rrset_ttl: u32,
}

/// The subset of a GET response this client cares about
#[derive(Debug, Deserialize)]
struct RrsetRecord {
    #[serde(default)]
    rrset_values: Vec<String>,
}

impl GandiRecordClient {
    /// Create a client for the given API endpoint
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        ttl: u32,
        timeout: Duration,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            ttl,
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Create a client from a validated updater configuration
    pub fn from_config(config: &UpdaterConfig) -> Self {
        Self::new(
            config.api_url.clone(),
            config.api_key.clone(),
            config.ttl,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Per-record endpoint path: `{base}/zones/{zone}/records/{name}/{type}`
    fn record_url(&self, record: &RecordRef) -> String {
        format!(
            "{}/zones/{}/records/{}/{}",
            self.api_url, record.zone, record.name, record.rtype
        )
    }

    /// Extract the first rrset value from a GET response body.
    ///
    /// A body without `rrset_values` (or with an empty list) is a record
    /// with no published value, which is a legitimate state, not an error.
    /// A body that is not JSON at all propagates as an error.
    fn parse_record_body(body: &str) -> Result<Option<String>> {
        let record: RrsetRecord = serde_json::from_str(body)?;
        Ok(record.rrset_values.into_iter().next())
    }
}

#[async_trait]
impl RecordClient for GandiRecordClient {
    async fn current_value(&self, record: &RecordRef) -> Result<Option<String>> {
        let url = self.record_url(record);
        tracing::debug!(url = %url, "reading current rrset");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| Error::record_read(format!("request failed: {}", e)))?;

        // The status is not inspected here: an unknown record answers with
        // an error body that simply lacks rrset_values, which maps to None.
        let body = response
            .text()
            .await
            .map_err(|e| Error::record_read(format!("failed to read response: {}", e)))?;

        Self::parse_record_body(&body)
    }

    async fn put_value(&self, record: &RecordRef, value: &str) -> Result<UpdateResponse> {
        let url = self.record_url(record);
        let payload = RrsetPayload {
            rrset_values: [value],
            rrset_ttl: self.ttl,
        };
        tracing::debug!(url = %url, ttl = self.ttl, "writing rrset");

        let response = self
            .client
            .put(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::record_update(format!("request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::record_update(format!("failed to read response: {}", e)))?;

        Ok(UpdateResponse { status, body })
    }
}
