//! Tiered caching layer over an optional shared store.
//!
//! # Backends
//!
//! - **Redis**: shared store, hashes map to native Redis hashes
//! - **Memcache**: shared store, hash fields are stored as `key:field`
//! - **Memory**: request-scoped fallback, only used when no shared store
//!   was configured at startup
//!
//! # Architecture
//!
//! - `CacheBackend` trait defines the interface every backend implements
//! - `CacheConnector` dispatches to the configured shared backend
//! - `MemoryCache` is created per inbound request and dropped with it
//! - `CacheStore` picks the backend once and absorbs backend errors, so a
//!   failing shared store degrades reads to misses and writes to no-ops
//!   without ever touching the memory fallback
//!
//! # Tiers
//!
//! | Tier | Key | TTL |
//! |------|-----|-----|
//! | HTML | `html:short:{hash}` / `html:long:{hash}` | 10 min / 12 h |
//! | Metadata | `metadata:data\|failure\|failure503:{info_hash}` | 7 d / 60 s / 300 s |
//! | Tracker peers | `tracker:{info_hash}` (hash) | 7 d |
//! | Tracker list | `tracker:list` | 24 h |
//! | IMDB | `imdb:{info_hash}` / `imdb:title:{hash}` | 7 d |
//! | Protected links | `protlink:{hash}` | 7 d |
//! | Solver sessions | `solver:session:{domain}` | 4 h |
//!
//! # Example
//!
//! ```rust,ignore
//! use torrent_enricher::cache::structs::cache_store::CacheStore;
//!
//! let store = CacheStore::for_request(shared.clone(), config.cache_ttl.clone());
//! store.set("key", "value", 60).await;
//! assert_eq!(store.get("key").await.as_deref(), Some("value"));
//! ```

/// Cache engine enumeration (redis, memcache).
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for cache connectors and the store.
pub mod impls;

/// Cache key builders for every tier.
pub mod keys;

/// Data structures for cache connections.
pub mod structs;

/// Cache backend trait definitions.
pub mod traits;
