pub mod connect_request;
pub mod connect_response;
pub mod connection_id;
pub mod error_response;
pub mod scrape_request;
pub mod scrape_response;
pub mod torrent_scrape_statistics;
pub mod transaction_id;
pub mod udp_tracker_client;
