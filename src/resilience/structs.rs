/// Failure-counting gate backed by the cache store.
pub mod circuit_breaker;

/// Thresholds and cooldown of a circuit breaker.
pub mod circuit_policy;

/// Semaphore plus per-domain spacing for link resolution.
pub mod link_limiter;

/// Process-wide token bucket.
pub mod token_bucket;

/// Mutable state of the token bucket.
pub mod token_bucket_state;
