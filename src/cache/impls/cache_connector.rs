use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use async_trait::async_trait;
use log::{info, warn};

impl CacheConnector {
    pub async fn new(config: &CacheConfig) -> Result<CacheConnector, CacheError> {
        let transaction = crate::utils::sentry_tracing::start_trace_transaction("cache_init", "cache");
        let connection_url = format!("{}{}", config.engine.url_scheme(), config.address);
        let result: Result<CacheConnector, CacheError> = match config.engine {
            CacheEngine::redis => {
                let redis_connector = CacheConnectorRedis::connect(&connection_url, &config.prefix).await?;
                info!("[CACHE] Connected to Redis at {}", config.address);
                Ok(CacheConnector {
                    redis: Some(redis_connector),
                    memcache: None,
                    engine: Some(CacheEngine::redis),
                })
            }
            CacheEngine::memcache => {
                let memcache_connector = CacheConnectorMemcache::connect(&connection_url, &config.prefix)?;
                info!("[CACHE] Connected to Memcache at {}", config.address);
                Ok(CacheConnector {
                    redis: None,
                    memcache: Some(memcache_connector),
                    engine: Some(CacheEngine::memcache),
                })
            }
        };
        crate::utils::sentry_tracing::finish_trace_transaction(transaction, &result, &[
            ("engine", format!("{:?}", config.engine)),
            ("address", config.address.clone()),
        ]);
        result
    }

    /// Connects and pings the configured shared store once at startup.
    ///
    /// `None` means no shared store is available for the lifetime of the
    /// process, so every request falls back to its own memory cache.
    pub async fn connect_shared(config: &CacheConfig) -> Option<CacheConnector> {
        if !config.enabled {
            info!("[CACHE] No shared store configured, using request-scoped memory cache");
            return None;
        }
        let connector = match CacheConnector::new(config).await {
            Ok(connector) => connector,
            Err(error) => {
                warn!("[CACHE] Shared store unavailable at startup ({}), using request-scoped memory cache", error);
                return None;
            }
        };
        if let Err(error) = connector.ping().await {
            warn!("[CACHE] Shared store did not answer ping ({}), using request-scoped memory cache", error);
            return None;
        }
        Some(connector)
    }

    pub fn engine(&self) -> Option<&CacheEngine> {
        self.engine.as_ref()
    }

    pub fn backend(&self) -> Result<&dyn CacheBackend, CacheError> {
        match self.engine.as_ref() {
            Some(CacheEngine::redis) => self.redis.as_ref()
                .map(|r| r as &dyn CacheBackend)
                .ok_or_else(|| CacheError::ConnectionError("Redis not connected".to_string())),
            Some(CacheEngine::memcache) => self.memcache.as_ref()
                .map(|m| m as &dyn CacheBackend)
                .ok_or_else(|| CacheError::ConnectionError("Memcache not connected".to_string())),
            None => Err(CacheError::ConnectionError("No cache engine configured".to_string())),
        }
    }
}

#[async_trait]
impl CacheBackend for CacheConnector {
    async fn ping(&self) -> Result<(), CacheError> {
        let transaction = crate::utils::sentry_tracing::start_trace_transaction("cache_ping", "cache");
        let result = match self.backend() {
            Ok(backend) => backend.ping().await,
            Err(e) => Err(e),
        };
        let engine = self.engine.as_ref().map(|engine| format!("{:?}", engine)).unwrap_or_default();
        crate::utils::sentry_tracing::finish_trace_transaction(transaction, &result, &[("engine", engine)]);
        result
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.backend()?.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: u64) -> Result<(), CacheError> {
        self.backend()?.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.backend()?.delete(key).await
    }

    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, CacheError> {
        self.backend()?.hash_get(key, field).await
    }

    async fn hash_set(&self, key: &str, fields: &[(&str, String)], ttl: u64) -> Result<(), CacheError> {
        self.backend()?.hash_set(key, fields, ttl).await
    }

    async fn hash_incr(&self, key: &str, field: &str, ttl: u64) -> Result<i64, CacheError> {
        self.backend()?.hash_incr(key, field, ttl).await
    }

    async fn hash_del(&self, key: &str, fields: &[&str]) -> Result<(), CacheError> {
        self.backend()?.hash_del(key, fields).await
    }
}
