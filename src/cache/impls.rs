pub mod cache_connector;
pub mod cache_connector_memcache;
pub mod cache_connector_redis;
pub mod cache_engine;
pub mod cache_store;
pub mod cache_store_tiers;
pub mod memory_cache;
