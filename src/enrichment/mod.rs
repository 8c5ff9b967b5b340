//! Record enrichment.
//!
//! # Components
//!
//! - `TorrentRecord` / `FilterStats` - scraped listing and filter counters
//! - `EnrichmentContext` - process-wide state built once at startup: shared
//!   cache connector, HTTP clients, metadata token bucket, per-hash locks,
//!   link limiter and metadata provider
//! - `RequestScope` - per-request components sharing one `CacheStore`, so
//!   the memory fallback lives exactly as long as the request
//! - `EnrichmentPipeline` - the staged enrichment run
//!
//! # Stages
//!
//! 1. intake: protected links resolved, info hashes recovered from magnets
//! 2. dedupe by lowercase info hash, first occurrence wins
//! 3. title backfill from metadata names for titles under 10 characters
//! 4. caller filter with [`FilterStats`](structs::filter_stats::FilterStats)
//! 5. metadata batch and tracker batch, run side by side
//! 6. size, date and IMDB fallbacks, then peer counts
//!
//! No stage fails the batch: a lookup that goes wrong leaves the field as
//! it was.

/// Implementation blocks for records, context, scope and pipeline.
pub mod impls;

/// Records, statistics, context, scope and pipeline.
pub mod structs;

/// Pure record helpers (dedupe, IMDB id checks, date formatting).
#[allow(clippy::module_inception)]
pub mod enrichment;

/// Unit tests for the enrichment stages.
pub mod tests;
