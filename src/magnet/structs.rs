/// A parsed magnet link.
pub mod magnet_link;
