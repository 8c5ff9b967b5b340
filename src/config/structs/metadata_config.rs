use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MetadataConfig {
    pub enabled: bool,
    /// URL template, `{info_hash}` is substituted per lookup.
    pub endpoint: String,
    pub timeout: u64,
    pub workers: usize,
    pub bucket_capacity: u32,
    pub refill_per_second: f64,
    pub timeout_threshold: u64,
    pub unavailable_threshold: u64,
    pub circuit_cooldown: u64,
    pub user_agent: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://itorrents.org/torrent/{info_hash}.torrent".to_string(),
            timeout: 10,
            workers: 8,
            bucket_capacity: 2,
            refill_per_second: 1.0,
            timeout_threshold: 3,
            unavailable_threshold: 5,
            circuit_cooldown: 60,
            user_agent: "DFIndexer/1.0".to_string(),
        }
    }
}
