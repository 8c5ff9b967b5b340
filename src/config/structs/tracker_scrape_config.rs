use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TrackerScrapeConfig {
    pub enabled: bool,
    pub timeout_ms: u64,
    pub retries: u32,
    /// Zero means every eligible tracker may be probed.
    pub max_trackers: usize,
    pub workers: usize,
    pub list_source_timeout: u64,
    pub list_sources: Vec<String>,
    pub static_trackers: Vec<String>,
    pub circuit_threshold: u64,
    pub circuit_cooldown: u64,
    pub user_agent: String,
}

impl Default for TrackerScrapeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: 500,
            retries: 2,
            max_trackers: 0,
            workers: 8,
            list_source_timeout: 10,
            list_sources: vec![
                "https://cf.trackerslist.com/best.txt".to_string(),
                "https://ngosang.github.io/trackerslist/trackers_all_ip.txt".to_string(),
                "https://raw.githubusercontent.com/ngosang/trackerslist/master/trackers_best.txt".to_string(),
            ],
            static_trackers: vec![
                "udp://tracker.opentrackr.org:1337/announce".to_string(),
                "udp://tracker.openbittorrent.com:80/announce".to_string(),
                "udp://explodie.org:6969/announce".to_string(),
                "udp://p4p.arenabg.com:1337/announce".to_string(),
                "udp://tracker.internetwarriors.net:1337".to_string(),
                "udp://tracker.torrent.eu.org:451/announce".to_string(),
            ],
            circuit_threshold: 3,
            circuit_cooldown: 60,
            user_agent: "DFIndexer/1.0".to_string(),
        }
    }
}
