// # gddns-core
//
// Core library for the gddns updater.
//
// ## Architecture Overview
//
// This library provides everything except the actual HTTP calls:
// - **IpResolver**: Trait for discovering the current public IPv4 address
// - **RecordClient**: Trait for reading/writing one DNS record at a provider
// - **Reconciler**: Runs the resolve → read → compare → update sequence and
//   produces a terminal [`Outcome`]
//
// ## Design Principles
//
// 1. **Leaves return values, the orchestrator decides**: resolver and record
//    client report results; all branching and user-facing messaging lives in
//    the `Reconciler`
// 2. **No process exits in library code**: only the binary translates the
//    final `Outcome` into an exit code
// 3. **One shot**: no state survives a run, no retries, no background tasks

pub mod config;
pub mod error;
pub mod reconcile;
pub mod traits;

// Re-export core types for convenience
pub use config::UpdaterConfig;
pub use error::{Error, Result};
pub use reconcile::{Outcome, Reconciler};
pub use traits::{IpResolver, PublicIp, RecordClient, RecordRef, UpdateResponse};
