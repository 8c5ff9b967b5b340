use crate::tracker::structs::info_hash::InfoHash;

pub const MAGNET_PREFIX: &str = "magnet:?";
pub const BTIH_PREFIX: &str = "urn:btih:";

const HTML_ENTITIES: [(&str, &str); 2] = [("&amp;", "&"), ("&#038;", "&")];

pub fn unescape_entities(value: &str) -> String {
    HTML_ENTITIES
        .iter()
        .fold(value.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}

/// Decodes an RFC 4648 base32 info hash (32 characters, no padding).
pub fn decode_base32_info_hash(value: &str) -> Option<InfoHash> {
    if value.len() != 32 {
        return None;
    }
    let mut bytes = [0u8; 20];
    let mut buffer: u64 = 0;
    let mut bits = 0u32;
    let mut index = 0usize;
    for character in value.bytes() {
        let digit = match character.to_ascii_uppercase() {
            upper @ b'A'..=b'Z' => upper - b'A',
            number @ b'2'..=b'7' => number - b'2' + 26,
            _ => return None,
        };
        buffer = (buffer << 5) | u64::from(digit);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            *bytes.get_mut(index)? = (buffer >> bits) as u8;
            index += 1;
            buffer &= (1 << bits) - 1;
        }
    }
    (index == 20).then_some(InfoHash(bytes))
}
