/// What a fetched page points at.
pub mod page_scan;
