//! Cache key builders.
//!
//! URLs and titles are shortened with [`hash_key`] so keys stay bounded.

use crate::common::common::hash_key;
use crate::tracker::structs::info_hash::InfoHash;

pub const TRACKER_LIST_KEY: &str = "tracker:list";
pub const CIRCUIT_TRACKER_KEY: &str = "circuit:tracker";
pub const CIRCUIT_METADATA_KEY: &str = "circuit:metadata";

pub fn html_short_key(url: &str) -> String {
    format!("html:short:{}", hash_key(url))
}

pub fn html_long_key(url: &str) -> String {
    format!("html:long:{}", hash_key(url))
}

pub fn metadata_key(info_hash: &InfoHash) -> String {
    format!("metadata:data:{info_hash}")
}

pub fn metadata_failure_key(info_hash: &InfoHash) -> String {
    format!("metadata:failure:{info_hash}")
}

pub fn metadata_failure503_key(info_hash: &InfoHash) -> String {
    format!("metadata:failure503:{info_hash}")
}

pub fn tracker_key(info_hash: &InfoHash) -> String {
    format!("tracker:{info_hash}")
}

pub fn imdb_key(info_hash: &InfoHash) -> String {
    format!("imdb:{info_hash}")
}

/// `None` when the title has no usable base, see [`imdb_base_title`].
pub fn imdb_title_key(title: &str) -> Option<String> {
    imdb_base_title(title).map(|base| format!("imdb:title:{}", hash_key(&base)))
}

pub fn protlink_key(url: &str) -> String {
    format!("protlink:{}", hash_key(url))
}

pub fn solver_session_key(domain: &str) -> String {
    format!("solver:session:{}", domain.to_lowercase())
}

const AUDIO_TAGS: [&str; 3] = ["[brazilian]", "[eng]", "[br-dub]"];

const RELEASE_TAGS: [&str; 26] = [
    "web-dl", "webrip", "bluray", "dvdrip", "hdrip", "hdtv", "bdrip", "brrip",
    "1080p", "720p", "2160p", "4k",
    "hd", "fhd", "uhd", "sd", "hdr",
    "x264", "x265", "hevc", "avc",
    "dual", "dublado", "nacional", "legendado", "legenda",
];

/// Title reduced to what every release of the same work shares: quality,
/// source, codec and audio tags are dropped, accents folded, words joined
/// with dots. `Show.S01E01.2020.1080p.WEB-DL.x264` becomes `show.s01e01.2020`.
///
/// The leading word is never treated as a tag. Bases shorter than three
/// characters are `None`.
pub fn imdb_base_title(title: &str) -> Option<String> {
    let mut folded: String = title.chars().map(fold_accent).collect::<String>().to_lowercase();
    for tag in AUDIO_TAGS {
        folded = folded.replace(tag, " ");
    }
    let base = folded
        .split(|c: char| c == '.' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .enumerate()
        .filter(|(index, word)| *index == 0 || !RELEASE_TAGS.contains(word))
        .map(|(_, word)| word)
        .collect::<Vec<&str>>()
        .join(".");
    (base.chars().count() >= 3).then_some(base)
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        other => other,
    }
}
