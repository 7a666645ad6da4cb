//! Configuration for the gddns updater
//!
//! A single flat struct: the updater runs once, against one record, with one
//! credential. The CLI layer fills this in and calls [`UpdaterConfig::validate`]
//! before any component is built.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::traits::{RecordRef, DEFAULT_TTL};

/// Default IP-echo service queried for the public address
pub const DEFAULT_IP_URL: &str = "http://ip.42.pl/raw";

/// Default Gandi LiveDNS API base URL
pub const DEFAULT_API_URL: &str = "https://dns.api.gandi.net/api/v5";

/// Default HTTP timeout for every outbound request (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Updater configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// Provider API key, sent as the `X-Api-Key` header
    pub api_key: String,

    /// The record to reconcile
    pub record: RecordRef,

    /// Provider API base URL
    pub api_url: String,

    /// IP-echo service URL
    pub ip_url: String,

    /// TTL (seconds) submitted with updates
    pub ttl: u32,

    /// HTTP timeout (seconds) applied to every outbound request
    pub timeout_secs: u64,
}

impl UpdaterConfig {
    /// Create a configuration with default endpoints, TTL and timeout
    pub fn new(api_key: impl Into<String>, record: RecordRef) -> Self {
        Self {
            api_key: api_key.into(),
            record,
            api_url: DEFAULT_API_URL.to_string(),
            ip_url: DEFAULT_IP_URL.to_string(),
            ttl: DEFAULT_TTL,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::config("API key cannot be empty"));
        }
        if self.record.zone.is_empty() {
            return Err(Error::config("zone identifier cannot be empty"));
        }
        if self.record.name.is_empty() {
            return Err(Error::config("record name cannot be empty"));
        }
        if self.record.rtype.is_empty() {
            return Err(Error::config("record type cannot be empty"));
        }
        for (label, url) in [("API URL", &self.api_url), ("IP service URL", &self.ip_url)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::config(format!(
                    "{} must use an http or https scheme, got: {}",
                    label, url
                )));
            }
        }
        if self.ttl == 0 {
            return Err(Error::config("TTL must be greater than zero"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(Error::config(format!(
                "timeout must be between 1 and 300 seconds, got: {}",
                self.timeout_secs
            )));
        }
        Ok(())
    }
}
