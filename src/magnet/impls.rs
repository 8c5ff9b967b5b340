/// Parsing and accessors for `MagnetLink`.
pub mod magnet_link;
