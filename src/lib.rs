//! # Torrent Enricher
//!
//! Enrichment and resource-management pipeline for scraped torrent listings.
//!
//! ## Overview
//!
//! Listings scraped from third-party sites arrive with gaps: no size, no
//! date, no peer counts, no IMDB id. This crate fills them by asking
//! unreliable external services (a torrent metadata endpoint and public
//! BitTorrent trackers over UDP) while keeping those services and itself
//! from being overloaded.
//!
//! ## Features
//!
//! - **UDP Scrape**: BEP 15 connect/scrape client with per-phase retries
//! - **Tiered Caching**: Redis or Memcache shared store with a request-scoped
//!   memory fallback, separate TTLs per tier and outcome
//! - **Circuit Breaking**: independent breakers for the metadata endpoint and
//!   the tracker list mirrors
//! - **Rate Limiting**: token bucket for metadata lookups, semaphore plus
//!   per-domain spacing for protected-link resolution
//! - **Monitoring**: `log` output, `tracing` spans and optional Sentry
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrent_enricher::config::structs::configuration::Configuration;
//! use torrent_enricher::enrichment::structs::enrichment_context::EnrichmentContext;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let context = EnrichmentContext::new(config).await?;
//! let (records, stats) = context.pipeline().enrich(records, false, false, None, Some("site")).await;
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Redis, Memcache and memory backends behind the tiered `CacheStore`
//! - [`common`] - Logging setup, key hashing, byte formatting, query parsing
//! - [`config`] - Configuration management and TOML parsing
//! - [`enrichment`] - Records, process context, request scope and the pipeline
//! - [`links`] - Protected-link resolution
//! - [`magnet`] - Magnet URI parsing
//! - [`metadata`] - Metadata provider trait, HTTP provider and guarded fetcher
//! - [`resilience`] - Circuit breaker, token bucket and link limiter
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Info hashes, tracker list provider and bulk peer lookups
//! - [`udp`] - UDP tracker scrape client (BEP 15)
//! - [`utils`] - Sentry tracing helpers

/// Caching layer module supporting Redis and Memcache.
///
/// Wraps the configured shared store, or a memory cache owned by one request
/// when none is configured, behind one tiered interface.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Contains logging setup, cache key hashing, byte formatting, query string
/// parsing and the error type returned to the binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, writing and validating `config.toml`.
pub mod config;

/// Record enrichment.
///
/// The staged pipeline plus the process-wide context and per-request scope
/// it runs in.
pub mod enrichment;

/// Protected-link resolution into magnets.
pub mod links;

/// Magnet URI parsing.
pub mod magnet;

/// Torrent metadata lookups.
///
/// Provider trait, HTTP provider reading partial torrent files, and the
/// fetcher guarding it with caching, a circuit breaker and a token bucket.
pub mod metadata;

/// Failure and load control: circuit breaker, token bucket, link limiter.
pub mod resilience;

/// CLI argument parsing.
pub mod structs;

/// Tracker peer-count lookups.
///
/// Info hash type, dynamic tracker list and bulk peer-count service.
pub mod tracker;

/// UDP tracker scrape client (BEP 15).
pub mod udp;

/// Utility functions and helpers.
pub mod utils;
