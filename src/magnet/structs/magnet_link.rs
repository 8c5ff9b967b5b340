use std::collections::HashMap;
use crate::tracker::structs::info_hash::InfoHash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnetLink {
    pub info_hash: InfoHash,
    pub display_name: Option<String>,
    /// `tr` values in link order, duplicates removed.
    pub trackers: Vec<String>,
    /// Every parameter other than `xt`, `dn` and `tr`, keys lowercased.
    pub params: HashMap<String, Vec<String>>,
}
