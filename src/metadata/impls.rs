pub mod hash_locks;
pub mod http_metadata_provider;
pub mod metadata_fetcher;
pub mod torrent_header_parser;
pub mod torrent_metadata;
