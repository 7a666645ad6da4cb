// # Record Client Trait
//
// Defines the interface for reading and writing a single DNS record at the
// provider.
//
// ## Implementations
//
// - Gandi LiveDNS v5: `gddns-provider-gandi` crate
//
// The client is a thin typed wrapper around two HTTP operations. It takes no
// success/failure decision for the write: the raw status code and body are
// handed back as an [`UpdateResponse`] and interpreted by the `Reconciler`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Default TTL (seconds) submitted with record updates
pub const DEFAULT_TTL: u32 = 300;

/// Identifies exactly one DNS record at the provider.
///
/// Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRef {
    /// Provider's opaque zone identifier
    pub zone: String,
    /// Record name (e.g. "home" or "@")
    pub name: String,
    /// Record type (e.g. "A")
    pub rtype: String,
}

impl RecordRef {
    pub fn new(zone: impl Into<String>, name: impl Into<String>, rtype: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            name: name.into(),
            rtype: rtype.into(),
        }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} in zone {}", self.name, self.rtype, self.zone)
    }
}

/// Raw result of a record write: HTTP status code plus response body.
///
/// Success policy (201 Created, anything else is a failure) lives in the
/// orchestrator, not here, so the decision is a pure comparison against a
/// known constant rather than a dependency on a transport library's
/// response type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResponse {
    /// HTTP status code returned by the provider
    pub status: u16,
    /// Response body text, kept verbatim for diagnostics
    pub body: String,
}

/// Trait for DNS record client implementations
///
/// Implementations issue one outbound request per call, attach the
/// credential header to every call, and cache nothing between calls.
#[async_trait]
pub trait RecordClient: Send + Sync {
    /// Read the currently published value of a record
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: the first published value of the record
    /// - `Ok(None)`: the record has no published value (a legitimate state,
    ///   e.g. first run against a fresh zone)
    /// - `Err(Error)`: transport failure or a body that does not parse
    async fn current_value(&self, record: &RecordRef) -> Result<Option<String>>;

    /// Overwrite the record with a single value
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateResponse)`: the provider's verbatim status and body
    /// - `Err(Error)`: the request could not be issued or the response body
    ///   could not be read
    async fn put_value(&self, record: &RecordRef, value: &str) -> Result<UpdateResponse>;
}
