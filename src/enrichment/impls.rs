/// Accessors on `TorrentRecord`.
pub mod torrent_record;

/// Construction of `EnrichmentContext`.
pub mod enrichment_context;

/// Construction of `RequestScope`.
pub mod request_scope;

/// Stage implementations of `EnrichmentPipeline`.
pub mod enrichment_pipeline;
