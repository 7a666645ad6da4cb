//! Core traits for the gddns updater
//!
//! This module defines the seams between the orchestrator and the two
//! network-facing collaborators.
//!
//! - [`IpResolver`]: discover the current public IPv4 address
//! - [`RecordClient`]: read/write a single DNS record at the provider

pub mod ip_resolver;
pub mod record_client;

pub use ip_resolver::{IpResolver, PublicIp};
pub use record_client::{RecordClient, RecordRef, UpdateResponse, DEFAULT_TTL};
