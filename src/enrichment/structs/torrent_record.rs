use serde::{Deserialize, Serialize};

/// A listing as produced by a scraper. Fields the site did not provide are
/// `None` until a stage fills them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TorrentRecord {
    #[serde(default, alias = "infoHash", skip_serializing_if = "Option::is_none")]
    pub info_hash: Option<String>,
    #[serde(default, alias = "magnetLink", alias = "magnet", skip_serializing_if = "Option::is_none")]
    pub magnet_link: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, alias = "seedCount", skip_serializing_if = "Option::is_none")]
    pub seed_count: Option<u32>,
    #[serde(default, alias = "leechCount", skip_serializing_if = "Option::is_none")]
    pub leech_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trackers: Vec<String>,
}
