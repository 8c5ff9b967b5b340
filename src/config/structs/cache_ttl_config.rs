use serde::{Deserialize, Serialize};

/// Expiry in seconds of every cache tier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CacheTtlConfig {
    pub html_short: u64,
    pub html_long: u64,
    pub metadata: u64,
    pub metadata_failure: u64,
    pub metadata_failure_503: u64,
    pub tracker_peers: u64,
    pub tracker_list: u64,
    pub imdb: u64,
    pub protected_link: u64,
    pub solver_session: u64,
    pub circuit_counter: u64,
}

impl Default for CacheTtlConfig {
    fn default() -> Self {
        Self {
            html_short: 600,
            html_long: 43_200,
            metadata: 604_800,
            metadata_failure: 60,
            metadata_failure_503: 300,
            tracker_peers: 604_800,
            tracker_list: 86_400,
            imdb: 604_800,
            protected_link: 604_800,
            solver_session: 14_400,
            circuit_counter: 60,
        }
    }
}
