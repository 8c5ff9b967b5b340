use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use crate::cache::structs::cache_store::CacheStore;
use crate::metadata::structs::hash_locks::HashLocks;
use crate::metadata::traits::metadata_provider::MetadataProvider;
use crate::resilience::structs::circuit_breaker::CircuitBreaker;
use crate::resilience::structs::token_bucket::TokenBucket;

/// Metadata provider guarded by cache, breaker, negative cache, in-flight
/// locks and the token bucket.
///
/// The provider, bucket and locks are process-wide; the store and breaker
/// follow the request scope.
pub struct MetadataFetcher {
    pub(crate) provider: Arc<dyn MetadataProvider>,
    pub(crate) store: CacheStore,
    pub(crate) breaker: CircuitBreaker,
    pub(crate) bucket: Arc<TokenBucket>,
    pub(crate) locks: Arc<HashLocks>,
    pub(crate) workers: usize,
    pub(crate) cache_hits: AtomicU64,
    pub(crate) cache_misses: AtomicU64,
    pub(crate) provider_calls: AtomicU64,
}
