use crate::cache::errors::CacheError;

/// The memcache calls behind a hash counter, separated so the bump logic
/// runs without a server.
pub trait MemcacheCounter {
    /// Stores `value` only when `key` does not exist yet.
    fn add_if_absent(&self, key: &str, value: &str, expiration: u32) -> Result<(), CacheError>;

    fn incr(&self, key: &str, amount: u64) -> Result<u64, CacheError>;

    fn refresh_ttl(&self, key: &str, expiration: u32) -> Result<bool, CacheError>;
}
