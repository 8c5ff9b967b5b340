//! Guards protecting unreliable third parties from overload.
//!
//! - `CircuitBreaker` counts consecutive failures in the cache store and
//!   short-circuits calls during a cooldown. Its state is global when a
//!   shared store is configured and request-local otherwise.
//! - `TokenBucket` paces metadata lookups (burst of 2, then 1/s).
//! - `LinkLimiter` bounds concurrent protected-link resolutions and keeps a
//!   minimum gap between requests to the same domain.

/// Failure classes counted by the circuit breaker.
pub mod enums;

/// Implementation blocks for the guards.
pub mod impls;

/// Guard data structures.
pub mod structs;
