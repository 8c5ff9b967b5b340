use std::str::FromStr;
use crate::common::common::{parse_query, unique_stable};
use crate::magnet::enums::magnet_error::MagnetError;
use crate::magnet::magnet::{decode_base32_info_hash, unescape_entities, BTIH_PREFIX, MAGNET_PREFIX};
use crate::magnet::structs::magnet_link::MagnetLink;
use crate::tracker::structs::info_hash::InfoHash;

impl MagnetLink {
    pub fn parse(uri: &str) -> Result<MagnetLink, MagnetError> {
        let uri = unescape_entities(uri.trim());
        let has_prefix = uri.get(..MAGNET_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(MAGNET_PREFIX));
        if !has_prefix {
            return Err(MagnetError::Scheme);
        }
        let mut params = parse_query(&uri[MAGNET_PREFIX.len()..]);

        let topic = params
            .remove("xt")
            .unwrap_or_default()
            .into_iter()
            .find_map(|xt| {
                let xt = xt.trim();
                xt.get(..BTIH_PREFIX.len())
                    .filter(|prefix| prefix.eq_ignore_ascii_case(BTIH_PREFIX))
                    .map(|_| xt[BTIH_PREFIX.len()..].to_string())
            })
            .ok_or(MagnetError::MissingInfoHash)?;
        let info_hash = match topic.len() {
            40 => InfoHash::from_str(&topic).ok(),
            32 => decode_base32_info_hash(&topic),
            _ => None,
        }
        .ok_or_else(|| MagnetError::InvalidInfoHash(topic.clone()))?;

        let display_name = params
            .remove("dn")
            .unwrap_or_default()
            .into_iter()
            .map(|name| name.trim().to_string())
            .find(|name| !name.is_empty());
        let trackers = unique_stable(
            params
                .remove("tr")
                .unwrap_or_default()
                .into_iter()
                .map(|tracker| tracker.trim().to_string())
                .filter(|tracker| !tracker.is_empty()),
        );

        Ok(MagnetLink { info_hash, display_name, trackers, params })
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(&key.to_lowercase())?.first().map(String::as_str)
    }

    /// `xl`, the exact length in bytes, when present and positive.
    pub fn exact_length(&self) -> Option<i64> {
        self.param("xl")?.trim().parse::<i64>().ok().filter(|length| *length > 0)
    }
}

impl FromStr for MagnetLink {
    type Err = MagnetError;

    fn from_str(uri: &str) -> Result<Self, Self::Err> {
        MagnetLink::parse(uri)
    }
}
