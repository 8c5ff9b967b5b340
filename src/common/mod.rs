//! Common utilities and shared functionality.
//!
//! Helpers used by every other module of the enrichment pipeline.
//!
//! # Utilities
//!
//! - Logging setup (`fern` dispatcher with colored levels)
//! - Cache key hashing
//! - Human readable byte sizes
//! - Timestamp utilities
//! - Query string parsing
//!
//! # Data Structures
//!
//! - `CustomError` - Error type returned to the binary entry point

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
