//! Protected-link resolution.
//!
//! Listing sites often hide magnets behind ad redirectors and link
//! shorteners. [`structs::link_resolver::LinkResolver`] turns such a link back
//! into a magnet:
//!
//! 1. `protlink:{hash(url)}` cache
//! 2. direct decode of an ad-link `id` parameter (base64 or base64url, up to
//!    three layers)
//! 3. manual redirect following under the process-wide
//!    [`LinkLimiter`](crate::resilience::structs::link_limiter::LinkLimiter),
//!    scanning every final page for a magnet or the next hop
//!
//! Resolved magnets are cached for the protected-link TTL.

/// Page scan outcomes.
pub mod enums;

/// Implementation blocks for the resolver and page scanner.
pub mod impls;

/// Resolver and page scanner.
pub mod structs;

/// Ad-link decoding helpers.
#[allow(clippy::module_inception)]
pub mod links;

/// Unit tests for link resolution.
pub mod tests;
