use serde::{Deserialize, Serialize};

/// Leecher and seeder counts, cached as `{"leech":..,"seed":..}`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeerCount {
    #[serde(rename = "leech")]
    pub leechers: u32,
    #[serde(rename = "seed")]
    pub seeders: u32,
}
