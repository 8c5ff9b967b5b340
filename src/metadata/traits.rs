/// Lookup of metadata by info hash.
pub mod metadata_provider;
