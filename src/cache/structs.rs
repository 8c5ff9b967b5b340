//! Cache connector structures.

/// Main cache connector providing unified interface.
pub mod cache_connector;

/// Redis-specific cache connector implementation.
pub mod cache_connector_redis;

/// Memcache-specific cache connector implementation.
pub mod cache_connector_memcache;

/// Request-scoped in-process cache.
pub mod memory_cache;

/// Backend-agnostic store handed to every component.
pub mod cache_store;
