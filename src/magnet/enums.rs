/// Why a magnet link could not be parsed.
pub mod magnet_error;
