/// Failure classes counted separately by a circuit breaker.
pub mod failure_kind;
