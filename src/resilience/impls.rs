pub mod circuit_breaker;
pub mod circuit_policy;
pub mod failure_kind;
pub mod link_limiter;
pub mod token_bucket;
