use crate::enrichment::enrichment::is_imdb_id;
use crate::enrichment::structs::torrent_record::TorrentRecord;
use crate::links::links::is_magnet;
use crate::magnet::structs::magnet_link::MagnetLink;
use crate::tracker::structs::info_hash::InfoHash;

impl TorrentRecord {
    pub fn parsed_info_hash(&self) -> Option<InfoHash> {
        InfoHash::parse_lenient(self.info_hash.as_deref())
    }

    pub fn magnet(&self) -> Option<MagnetLink> {
        MagnetLink::parse(self.magnet_link.as_deref()?).ok()
    }

    /// Link that still has to be resolved into a magnet.
    pub fn pending_link(&self) -> Option<&str> {
        let link = self.magnet_link.as_deref()?.trim();
        (!link.is_empty() && !is_magnet(link)).then_some(link)
    }

    pub fn has_peer_counts(&self) -> bool {
        self.seed_count.unwrap_or(0) > 0 || self.leech_count.unwrap_or(0) > 0
    }

    pub fn valid_imdb(&self) -> Option<&str> {
        self.imdb.as_deref().map(str::trim).filter(|imdb| is_imdb_id(imdb))
    }

    /// The record's own trackers, or the magnet's `tr` values when it has none.
    pub fn tracker_candidates(&self) -> Vec<String> {
        if !self.trackers.is_empty() {
            return self.trackers.clone();
        }
        self.magnet().map(|magnet| magnet.trackers).unwrap_or_default()
    }
}
