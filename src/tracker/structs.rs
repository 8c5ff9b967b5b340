//! Tracker data structures.

/// 20-byte torrent identifier.
pub mod info_hash;

/// Leecher and seeder counts for one torrent.
pub mod peer_count;

/// Dynamic public tracker list.
pub mod tracker_list_provider;

/// Bulk peer-count lookups.
pub mod tracker_service;
