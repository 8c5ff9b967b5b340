use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

pub const MAX_DECODE_LAYERS: usize = 3;

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

const PROTECTED_PATTERNS: [&str; 7] = [
    "protlink=",
    "encurtador",
    "encurta",
    "get.php",
    "systemads",
    "?go=",
    "&go=",
];

pub fn is_magnet(value: &str) -> bool {
    value.get(..7).is_some_and(|prefix| prefix.eq_ignore_ascii_case("magnet:"))
}

/// Whether `href` looks like a redirector that hides a magnet.
pub fn is_protected_link(href: &str) -> bool {
    let href = href.to_lowercase();
    PROTECTED_PATTERNS.iter().any(|pattern| href.contains(pattern))
}

/// Decodes base64 or base64url text, padding optional.
pub fn decode_base64_text(value: &str) -> Option<String> {
    let value = value.trim();
    [&STANDARD_LENIENT, &URL_SAFE_LENIENT]
        .into_iter()
        .find_map(|engine| engine.decode(value).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok())
}

/// Peels up to [`MAX_DECODE_LAYERS`] base64 layers looking for a magnet.
pub fn decode_magnet_layers(value: &str) -> Option<String> {
    if is_magnet(value) {
        return Some(value.to_string());
    }
    let mut current = value.to_string();
    for _ in 0..MAX_DECODE_LAYERS {
        let decoded = decode_base64_text(&current)?;
        if is_magnet(&decoded) {
            return Some(decoded);
        }
        current = decoded;
    }
    None
}

/// Raw `id` query parameter, percent-decoded with `+` left intact.
pub fn ad_link_id(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.eq_ignore_ascii_case("id"))
        .map(|(_, value)| percent_encoding::percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}

/// Magnet carried directly in an ad-link `id` parameter, when there is one.
pub fn decode_ad_link(url: &str) -> Option<String> {
    decode_magnet_layers(&ad_link_id(url)?)
}

/// Undoes JavaScript string escapes and `&amp;` in an extracted URL.
pub fn unescape_link(value: &str) -> String {
    value
        .trim()
        .replace("\\/", "/")
        .replace("\\\"", "\"")
        .replace("\\'", "'")
        .replace("\\\\", "\\")
        .replace("&amp;", "&")
        .replace("&#038;", "&")
}
