//! Torrent metadata lookups.
//!
//! The metadata service is an external collaborator: the
//! [`MetadataProvider`](traits::metadata_provider::MetadataProvider) trait is
//! the seam, [`HttpMetadataProvider`](structs::http_metadata_provider::HttpMetadataProvider)
//! the production implementation.
//!
//! # Guarded fetching
//!
//! [`MetadataFetcher`](structs::metadata_fetcher::MetadataFetcher) wraps a
//! provider and checks, in order:
//!
//! 1. the metadata cache
//! 2. the `circuit:metadata` breaker
//! 3. the negative cache (definite failure 60 s, unavailable 300 s)
//! 4. a per info hash lock, then the cache again
//! 5. the shared token bucket
//!
//! Only then is the provider called. Timeouts and 503 replies feed the
//! breaker, any success resets it.

/// Enumerations for metadata failures.
pub mod enums;

/// Error type returned by providers.
pub mod errors;

/// Implementation blocks for metadata types.
pub mod impls;

/// Data structures for metadata lookups.
pub mod structs;

/// Provider trait.
pub mod traits;
