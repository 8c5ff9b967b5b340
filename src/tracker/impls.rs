pub mod info_hash;
pub mod peer_count;
pub mod tracker_list_provider;
pub mod tracker_service;
