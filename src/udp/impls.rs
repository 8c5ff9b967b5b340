pub mod probe_outcome;
pub mod request;
pub mod response;
pub mod scrape_error;
pub mod transaction_id;
pub mod udp_tracker_client;
