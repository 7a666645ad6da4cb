// # IP Resolver Trait
//
// Defines the interface for discovering the caller's public IPv4 address.
//
// ## Implementations
//
// - HTTP IP-echo service: `gddns-ip-http` crate
//
// ## Usage
//
// ```rust,ignore
// use gddns_core::IpResolver;
//
// let resolver = /* IpResolver implementation */;
// let ip = resolver.resolve().await?;
// println!("public ip: {}", ip);
// ```

use async_trait::async_trait;
use std::fmt;

use crate::error::{Error, Result};

/// A validated public IPv4 address in dotted-quad form.
///
/// Validation is intentionally loose: four dot-separated groups of 1-3
/// decimal digits each. Octets are NOT range-checked against 0-255, so
/// `"999.0.0.1"` passes. This matches the behavior of the echo services the
/// resolver talks to, which only ever hand back well-formed addresses; the
/// check exists to reject error pages and HTML bodies, not to validate IPs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicIp(String);

impl PublicIp {
    /// Parse a candidate string as a dotted-quad IPv4 address.
    ///
    /// The input is not trimmed; callers own whitespace handling.
    pub fn parse(candidate: &str) -> Result<Self> {
        if Self::is_dotted_quad(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(Error::ip_resolution(format!(
                "not a dotted-quad IPv4 address: {:?}",
                candidate
            )))
        }
    }

    /// The address as a string slice, for comparison against record values.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_dotted_quad(s: &str) -> bool {
        let mut groups = 0;
        for group in s.split('.') {
            groups += 1;
            if groups > 4 {
                return false;
            }
            if group.is_empty() || group.len() > 3 {
                return false;
            }
            if !group.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
        }
        groups == 4
    }
}

impl fmt::Display for PublicIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait for public IP resolver implementations
///
/// Implementations issue a single outbound request per call, hold no state,
/// and never retry; a failed resolution is reported to the [`Reconciler`],
/// which treats it as fatal for the run.
///
/// [`Reconciler`]: crate::reconcile::Reconciler
#[async_trait]
pub trait IpResolver: Send + Sync {
    /// Resolve the current public IPv4 address
    ///
    /// # Returns
    ///
    /// - `Ok(PublicIp)`: the validated address
    /// - `Err(Error)`: transport failure or a response body that does not
    ///   look like a dotted-quad address
    async fn resolve(&self) -> Result<PublicIp>;
}
