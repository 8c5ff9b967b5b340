//! Magnet URI parsing.
//!
//! Turns `magnet:?xt=urn:btih:...` links into a [`structs::magnet_link::MagnetLink`]
//! carrying the info hash, display name, announce URLs and every other
//! parameter (notably `xl`, the exact length in bytes).
//!
//! Both hex (40 characters) and base32 (32 characters) info hashes are
//! accepted. Links copied out of HTML pages often carry `&amp;` or `&#038;`
//! separators, those are unescaped before the query is split.

/// Magnet parsing errors.
pub mod enums;

/// Parsing and accessors.
pub mod impls;

/// The parsed magnet link.
pub mod structs;

/// Magnet helpers (base32 decoding, entity unescaping).
#[allow(clippy::module_inception)]
pub mod magnet;
