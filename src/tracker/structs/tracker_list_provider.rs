use std::time::Duration;
use crate::cache::structs::cache_store::CacheStore;
use crate::resilience::structs::circuit_breaker::CircuitBreaker;

/// Public tracker list from remote mirrors.
///
/// Resolution order: cached `tracker:list`, then the breaker (open means an
/// empty list without touching the network), then each mirror in turn.
pub struct TrackerListProvider {
    pub(crate) client: reqwest::Client,
    pub(crate) sources: Vec<String>,
    pub(crate) source_timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) store: CacheStore,
    pub(crate) breaker: CircuitBreaker,
}
