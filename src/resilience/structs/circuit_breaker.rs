use crate::cache::structs::cache_store::CacheStore;
use crate::resilience::structs::circuit_policy::CircuitPolicy;

/// Stored as a hash under `key` with fields `timeouts`, `503s` and `disabled`
/// (unix time the breaker reopens).
#[derive(Debug, Clone)]
pub struct CircuitBreaker {
    pub(crate) key: String,
    pub(crate) policy: CircuitPolicy,
    pub(crate) store: CacheStore,
}
