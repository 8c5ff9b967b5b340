use crate::tracker::structs::peer_count::PeerCount;

impl From<(u32, u32)> for PeerCount {
    /// `(leechers, seeders)`, the order trackers are reported in.
    fn from((leechers, seeders): (u32, u32)) -> Self {
        PeerCount { leechers, seeders }
    }
}

impl PeerCount {
    pub fn has_peers(&self) -> bool {
        self.leechers > 0 || self.seeders > 0
    }
}
