//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// Displayed and serialized as 40 lowercase hex characters, which is also
/// the form used in every cache key. Parsing accepts either case.
///
/// # Example
///
/// ```rust
/// use std::str::FromStr;
/// use torrent_enricher::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash::from_str("AABBCCDDEEFF00112233445566778899AABBCCDD").unwrap();
/// assert_eq!(hash.to_string(), "aabbccddeeff00112233445566778899aabbccdd");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
