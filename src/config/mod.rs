//! Configuration management module.
//!
//! Loads, validates and writes `config.toml`.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **cache**: optional shared store (Redis/Memcache)
//! - **cache_ttl**: expiry of every cache tier, in seconds
//! - **tracker_scrape**: UDP scrape timeouts, tracker list mirrors, circuit breaker
//! - **metadata**: metadata provider endpoint, token bucket, circuit breaker
//! - **link_resolver**: protected link concurrency, per-domain gap, timeouts
//! - **sentry_config**: error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use torrent_enricher::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false)?;
//! Configuration::validate(&config)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
