//! Metadata data structures.

/// Facts extracted from a torrent file.
pub mod torrent_metadata;

/// Byte patterns used to read partial bencode.
pub mod torrent_header_parser;

/// Range-request based provider.
pub mod http_metadata_provider;

/// Per info hash in-flight locks.
pub mod hash_locks;

/// Provider wrapped in cache, breaker and rate limiter.
pub mod metadata_fetcher;
