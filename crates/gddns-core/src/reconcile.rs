//! Reconciliation orchestrator
//!
//! The Reconciler is the only component with branching logic. It runs the
//! one-shot sequence
//!
//! ```text
//! resolve IP ──> read record ──> compare ──> (skip | update) ──> Outcome
//! ```
//!
//! and produces a terminal [`Outcome`]. Error policy:
//!
//! - IP resolution failure is fatal: the provider is never contacted.
//! - A record read that returns nothing (or fails) is soft: an absent
//!   current value is definitely different from the resolved IP, so the run
//!   proceeds to the update path.
//! - A write that does not come back `201 Created` is fatal.
//!
//! No step is retried; the next corrective action belongs to whatever
//! external timer re-invokes the program.

use tracing::{error, info};

use crate::traits::{IpResolver, PublicIp, RecordClient, RecordRef};

/// HTTP status the provider answers with on a successful record write
pub const UPDATE_CREATED: u16 = 201;

/// Terminal result of one reconciliation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The published record value already equals the public IP; no write
    /// was performed
    NoUpdateNeeded {
        /// The resolved public IP
        ip: PublicIp,
    },

    /// The record was overwritten with the public IP
    UpdateSucceeded {
        /// The value the record now carries
        ip: PublicIp,
        /// The value published before the write, if any
        previous: Option<String>,
    },

    /// The provider rejected the write, or the write could not be issued
    UpdateFailed {
        /// HTTP status code, when a response was received at all
        status: Option<u16>,
        /// Response body or transport error text
        detail: String,
    },

    /// The public IP could not be resolved; no provider call was made
    IpResolutionFailed {
        /// What went wrong (transport error or malformed body)
        reason: String,
    },
}

impl Outcome {
    /// Process exit code for this outcome: 0 on success paths, 1 on failure
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::NoUpdateNeeded { .. } | Outcome::UpdateSucceeded { .. } => 0,
            Outcome::UpdateFailed { .. } | Outcome::IpResolutionFailed { .. } => 1,
        }
    }

    /// Whether the run ended on a success path
    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }
}

/// One-shot reconciliation orchestrator
///
/// Owns its two collaborators as trait objects so tests can substitute
/// scripted doubles. [`Reconciler::run`] is infallible by construction: every
/// failure mode is folded into the returned [`Outcome`], and only the binary
/// entry point turns that into a process exit code.
pub struct Reconciler {
    resolver: Box<dyn IpResolver>,
    client: Box<dyn RecordClient>,
    record: RecordRef,
}

impl Reconciler {
    /// Create a new reconciler for one record
    pub fn new(
        resolver: Box<dyn IpResolver>,
        client: Box<dyn RecordClient>,
        record: RecordRef,
    ) -> Self {
        Self {
            resolver,
            client,
            record,
        }
    }

    /// Run the resolve → read → compare → update sequence once
    pub async fn run(&self) -> Outcome {
        info!(record = %self.record, "reconciling DNS record with public IP");

        let ip = match self.resolver.resolve().await {
            Ok(ip) => {
                info!(ip = %ip, "retrieved public ip");
                ip
            }
            Err(e) => {
                error!("failed to retrieve a valid public ip address: {}", e);
                return Outcome::IpResolutionFailed {
                    reason: e.to_string(),
                };
            }
        };

        // A missing or unreadable current value is not fatal: it cannot
        // equal the resolved IP, so the update path handles it.
        let current = match self.client.current_value(&self.record).await {
            Ok(Some(value)) => {
                info!(current = %value, "retrieved current record value");
                Some(value)
            }
            Ok(None) => {
                error!("no current value published for the record");
                None
            }
            Err(e) => {
                error!("failed to retrieve current record value: {}", e);
                None
            }
        };

        if current.as_deref() == Some(ip.as_str()) {
            info!("current record value matches the public ip, no update needed");
            return Outcome::NoUpdateNeeded { ip };
        }

        match self.client.put_value(&self.record, ip.as_str()).await {
            Ok(response) if response.status == UPDATE_CREATED => {
                info!(ip = %ip, "successfully updated the record");
                Outcome::UpdateSucceeded { ip, previous: current }
            }
            Ok(response) => {
                error!(
                    status = response.status,
                    body = %response.body,
                    "failed to update the record"
                );
                Outcome::UpdateFailed {
                    status: Some(response.status),
                    detail: response.body,
                }
            }
            Err(e) => {
                error!("failed to update the record: {}", e);
                Outcome::UpdateFailed {
                    status: None,
                    detail: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> PublicIp {
        PublicIp::parse(s).unwrap()
    }

    #[test]
    fn success_outcomes_exit_zero() {
        assert_eq!(Outcome::NoUpdateNeeded { ip: ip("1.2.3.4") }.exit_code(), 0);
        assert_eq!(
            Outcome::UpdateSucceeded {
                ip: ip("1.2.3.4"),
                previous: None
            }
            .exit_code(),
            0
        );
    }

    #[test]
    fn failure_outcomes_exit_one() {
        assert_eq!(
            Outcome::UpdateFailed {
                status: Some(403),
                detail: "forbidden".to_string()
            }
            .exit_code(),
            1
        );
        assert_eq!(
            Outcome::IpResolutionFailed {
                reason: "bad body".to_string()
            }
            .exit_code(),
            1
        );
    }
}
