use chrono::{DateTime, Utc};
use crate::metadata::structs::torrent_metadata::TorrentMetadata;

impl TorrentMetadata {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.creation_date.and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
    }

    /// Name usable as a title, at least three characters after trimming.
    pub fn usable_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| name.chars().count() >= 3)
    }
}
