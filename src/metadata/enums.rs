/// Negative cache classes.
pub mod metadata_failure;
