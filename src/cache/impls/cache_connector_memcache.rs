use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::memcache_counter::MemcacheCounter;
use async_trait::async_trait;
use log::debug;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

impl fmt::Debug for CacheConnectorMemcache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMemcache")
            .field("client", &"<memcache::Client>")
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl MemcacheCounter for memcache::Client {
    fn add_if_absent(&self, key: &str, value: &str, expiration: u32) -> Result<(), CacheError> {
        self.add(key, value, expiration).map_err(CacheError::MemcacheError)
    }

    fn incr(&self, key: &str, amount: u64) -> Result<u64, CacheError> {
        self.increment(key, amount).map_err(CacheError::MemcacheError)
    }

    fn refresh_ttl(&self, key: &str, expiration: u32) -> Result<bool, CacheError> {
        self.touch(key, expiration).map_err(CacheError::MemcacheError)
    }
}

/// Creates the counter at 1 or increments it. `add` is atomic, so two
/// callers racing on a missing key cannot both start from 1.
pub(crate) fn bump_counter<C: MemcacheCounter + ?Sized>(client: &C, key: &str, expiration: u32) -> Result<u64, CacheError> {
    if client.add_if_absent(key, "1", expiration).is_ok() {
        return Ok(1);
    }
    let value = client.incr(key, 1)?;
    if let Err(error) = client.refresh_ttl(key, expiration) {
        debug!("[Memcache] touch {} failed: {}", key, error);
    }
    Ok(value)
}

impl CacheConnectorMemcache {
    pub fn connect(url: &str, prefix: &str) -> Result<Self, CacheError> {
        let client = memcache::connect(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Memcache: {}", e)))?;
        Ok(Self {
            client: Arc::new(Mutex::new(client)),
            prefix: prefix.to_string(),
        })
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// Memcache has no hashes, every field lives under its own key.
    fn field_key(&self, key: &str, field: &str) -> String {
        format!("{}{}:{}", self.prefix, key, field)
    }

    fn expiration(ttl: u64) -> u32 {
        u32::try_from(ttl).unwrap_or(u32::MAX)
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemcache {
    async fn ping(&self) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.version()
            .map_err(CacheError::MemcacheError)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let client = self.client.lock();
        client.get::<String>(&self.prefixed(key))
            .map_err(CacheError::MemcacheError)
    }

    async fn set(&self, key: &str, value: &str, ttl: u64) -> Result<(), CacheError> {
        let client = self.client.lock();
        let key = self.prefixed(key);
        client.set(&key, value, Self::expiration(ttl))
            .map_err(CacheError::MemcacheError)?;
        debug!("[Memcache] Set {} ttl={}", key, ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.delete(&self.prefixed(key))
            .map_err(CacheError::MemcacheError)?;
        Ok(())
    }

    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, CacheError> {
        let client = self.client.lock();
        client.get::<String>(&self.field_key(key, field))
            .map_err(CacheError::MemcacheError)
    }

    async fn hash_set(&self, key: &str, fields: &[(&str, String)], ttl: u64) -> Result<(), CacheError> {
        let client = self.client.lock();
        for (field, value) in fields {
            client.set(&self.field_key(key, field), value.as_str(), Self::expiration(ttl))
                .map_err(CacheError::MemcacheError)?;
        }
        debug!("[Memcache] Hash set {} fields={} ttl={}", key, fields.len(), ttl);
        Ok(())
    }

    async fn hash_incr(&self, key: &str, field: &str, ttl: u64) -> Result<i64, CacheError> {
        let client = self.client.lock();
        let value = bump_counter(&*client, &self.field_key(key, field), Self::expiration(ttl))?;
        i64::try_from(value).map_err(|e| CacheError::OperationError(e.to_string()))
    }

    async fn hash_del(&self, key: &str, fields: &[&str]) -> Result<(), CacheError> {
        let client = self.client.lock();
        for field in fields {
            client.delete(&self.field_key(key, field))
                .map_err(CacheError::MemcacheError)?;
        }
        Ok(())
    }
}
