/// Key/value and hash operations implemented by every backend.
pub mod cache_backend;

/// Counter primitives the memcache connector builds `hash_incr` on.
pub mod memcache_counter;
