use std::fmt;
use std::sync::Arc;
use log::debug;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::cache_store::CacheStore;
use crate::cache::structs::memory_cache::MemoryCache;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_ttl_config::CacheTtlConfig;

impl fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("shared", &self.shared)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl CacheStore {
    /// Shared connector when one was configured at startup, otherwise a new
    /// memory cache owned by this request only.
    pub fn for_request(shared: Option<Arc<CacheConnector>>, ttl: CacheTtlConfig) -> CacheStore {
        match shared {
            Some(connector) => CacheStore {
                backend: connector,
                shared: true,
                ttl,
            },
            None => CacheStore::local(ttl),
        }
    }

    pub fn local(ttl: CacheTtlConfig) -> CacheStore {
        CacheStore {
            backend: Arc::new(MemoryCache::new()),
            shared: false,
            ttl,
        }
    }

    pub fn with_backend(backend: Arc<dyn CacheBackend>, shared: bool, ttl: CacheTtlConfig) -> CacheStore {
        CacheStore { backend, shared, ttl }
    }

    pub fn is_shared(&self) -> bool {
        self.shared
    }

    pub fn ttl(&self) -> &CacheTtlConfig {
        &self.ttl
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        match self.backend.get(key).await {
            Ok(value) => value,
            Err(error) => {
                debug!("[CACHE] get {} degraded to miss: {}", key, error);
                None
            }
        }
    }

    pub async fn set(&self, key: &str, value: &str, ttl: u64) {
        if let Err(error) = self.backend.set(key, value, ttl).await {
            debug!("[CACHE] set {} skipped: {}", key, error);
        }
    }

    pub async fn delete(&self, key: &str) {
        if let Err(error) = self.backend.delete(key).await {
            debug!("[CACHE] delete {} skipped: {}", key, error);
        }
    }

    pub async fn hash_get(&self, key: &str, field: &str) -> Option<String> {
        match self.backend.hash_get(key, field).await {
            Ok(value) => value,
            Err(error) => {
                debug!("[CACHE] hash_get {}.{} degraded to miss: {}", key, field, error);
                None
            }
        }
    }

    pub async fn hash_set(&self, key: &str, fields: &[(&str, String)], ttl: u64) {
        if let Err(error) = self.backend.hash_set(key, fields, ttl).await {
            debug!("[CACHE] hash_set {} skipped: {}", key, error);
        }
    }

    /// `None` when the backend failed, the caller then records nothing.
    pub async fn hash_incr(&self, key: &str, field: &str, ttl: u64) -> Option<i64> {
        match self.backend.hash_incr(key, field, ttl).await {
            Ok(value) => Some(value),
            Err(error) => {
                debug!("[CACHE] hash_incr {}.{} skipped: {}", key, field, error);
                None
            }
        }
    }

    pub async fn hash_del(&self, key: &str, fields: &[&str]) {
        if let Err(error) = self.backend.hash_del(key, fields).await {
            debug!("[CACHE] hash_del {} skipped: {}", key, error);
        }
    }
}
