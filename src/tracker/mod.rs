//! Tracker peer-count lookups.
//!
//! # Components
//!
//! - `InfoHash` / `PeerCount` - identifiers and the `(leechers, seeders)` pair
//! - `TrackerListProvider` - public UDP tracker list from remote mirrors,
//!   cached for a day and guarded by the `circuit:tracker` breaker
//! - `TrackerService` - bulk lookups, cache first, then bounded concurrent
//!   probing with one task per info hash
//!
//! # Probing
//!
//! Inside a task trackers are tried one after the other and the first
//! nonzero answer wins. Tasks themselves run concurrently up to the
//! configured worker count.

/// Enumerations for tracker errors.
pub mod enums;

/// Implementation blocks for tracker types.
pub mod impls;

/// Data structures for tracker lookups.
pub mod structs;


/// Tracker URL normalization helpers.
#[allow(clippy::module_inception)]
pub mod tracker;
