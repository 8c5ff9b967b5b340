use async_trait::async_trait;
use crate::cache::errors::CacheError;

/// Operations shared by the Redis, Memcache and in-process backends.
///
/// A `ttl` of zero stores without expiry. Hash operations apply the TTL to
/// the whole hash on backends with native hashes.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn ping(&self) -> Result<(), CacheError>;

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: &str, ttl: u64) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, CacheError>;

    async fn hash_set(&self, key: &str, fields: &[(&str, String)], ttl: u64) -> Result<(), CacheError>;

    /// Atomically increments `field` and refreshes the expiry, returning the new value.
    async fn hash_incr(&self, key: &str, field: &str, ttl: u64) -> Result<i64, CacheError>;

    async fn hash_del(&self, key: &str, fields: &[&str]) -> Result<(), CacheError>;
}
