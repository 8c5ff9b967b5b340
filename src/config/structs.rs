//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Shared cache backend configuration (Redis/Memcache).
pub mod cache_config;

/// Expiry of every cache tier.
pub mod cache_ttl_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Protected link resolution limits.
pub mod link_resolver_config;

/// Metadata provider endpoint and limits.
pub mod metadata_config;

/// Sentry error reporting configuration.
pub mod sentry_config;

/// UDP scrape and tracker list settings.
pub mod tracker_scrape_config;
