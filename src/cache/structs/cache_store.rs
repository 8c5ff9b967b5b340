use std::sync::Arc;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_ttl_config::CacheTtlConfig;

/// Cache handle given to every component for the duration of one request.
///
/// Holds either the process-wide shared connector or a fresh
/// [`MemoryCache`](crate::cache::structs::memory_cache::MemoryCache). The
/// choice is made once at construction; backend errors are absorbed here.
#[derive(Clone)]
pub struct CacheStore {
    pub(crate) backend: Arc<dyn CacheBackend>,
    pub(crate) shared: bool,
    pub(crate) ttl: CacheTtlConfig,
}
