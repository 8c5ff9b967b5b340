/// Malformed info hash input.
pub mod info_hash_error;
