use std::collections::HashSet;
use chrono::SecondsFormat;
use crate::enrichment::structs::torrent_record::TorrentRecord;
use crate::metadata::structs::torrent_metadata::TorrentMetadata;

/// Titles shorter than this are replaced by the metadata name when one exists.
pub const MIN_TITLE_LENGTH: usize = 10;

/// Keeps the first record of every info hash, compared case-insensitively.
/// Records without a valid hash are never dropped.
pub fn dedupe_records(records: Vec<TorrentRecord>) -> Vec<TorrentRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| match record.parsed_info_hash() {
            Some(info_hash) => seen.insert(info_hash),
            None => true,
        })
        .collect()
}

/// `tt` followed by at least one digit and nothing else.
pub fn is_imdb_id(value: &str) -> bool {
    value
        .strip_prefix("tt")
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

pub fn needs_title(record: &TorrentRecord) -> bool {
    record.title.trim().chars().count() < MIN_TITLE_LENGTH
}

/// Creation date as an RFC 3339 UTC timestamp.
pub fn metadata_date(metadata: &TorrentMetadata) -> Option<String> {
    metadata.created_at().map(|date| date.to_rfc3339_opts(SecondsFormat::Secs, true))
}
