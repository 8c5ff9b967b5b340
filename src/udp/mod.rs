//! UDP tracker client (BEP 15).
//!
//! Queries public trackers for peer counts with the two round trip
//! CONNECT / SCRAPE exchange.
//!
//! # Protocol Overview
//!
//! 1. Client sends a connect request carrying the protocol identifier
//! 2. Tracker responds with a connection ID
//! 3. Client sends a scrape request for one info hash using that ID
//! 4. Tracker responds with seeders, completed and leechers
//!
//! # Message Types
//!
//! - **Connect** (action=0): Establish connection, get connection ID
//! - **Scrape** (action=2): Query torrent statistics
//! - **Error** (action=3): Error response
//!
//! # Failure handling
//!
//! Every call uses its own socket on an ephemeral port. A lost reply is
//! resent with the same packet up to the configured retry count. A reply
//! with the wrong action or transaction ID fails the call at once.

/// Enumerations for packets, errors and probe outcomes.
pub mod enums;

/// Implementation blocks for packet codecs and the client.
pub mod impls;

/// Data structures for UDP protocol messages.
pub mod structs;


/// Protocol constants and tracker URL parsing.
#[allow(clippy::module_inception)]
pub mod udp;
