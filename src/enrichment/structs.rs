/// One scraped listing.
pub mod torrent_record;

/// Counters produced by the caller filter.
pub mod filter_stats;

/// Process-wide shared state.
pub mod enrichment_context;

/// Components for one inbound request.
pub mod request_scope;

/// The staged pipeline.
pub mod enrichment_pipeline;
