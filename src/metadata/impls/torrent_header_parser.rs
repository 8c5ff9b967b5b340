use regex::bytes::Regex;
use crate::metadata::errors::MetadataError;
use crate::metadata::structs::torrent_header_parser::TorrentHeaderParser;
use crate::metadata::structs::torrent_metadata::TorrentMetadata;

/// 2000-01-01 through 2100-01-01.
const CREATION_DATE_RANGE: std::ops::RangeInclusive<i64> = 946_684_800..=4_102_444_800;

impl TorrentHeaderParser {
    pub fn new() -> Result<TorrentHeaderParser, regex::Error> {
        Ok(TorrentHeaderParser {
            length: Regex::new(r"6:lengthi(\d+)e")?,
            name: Regex::new(r"4:name(\d+):")?,
            creation_date: Regex::new(r"13:creation datei(\d+)e")?,
            imdb_keys: vec![
                Regex::new(r"4:imdb(\d+):")?,
                Regex::new(r"7:imdb_id(\d+):")?,
                Regex::new(r"8:imdb-id(\d+):")?,
            ],
            imdb_id: Regex::new(r"^tt\d+$")?,
            imdb_url: Regex::new(r"imdb\.com/title/(tt\d+)")?,
        })
    }

    /// Extracts size, name, creation date and IMDB id. The size is the sum of
    /// every `length` key, so multi-file torrents add up; without one the
    /// data is rejected.
    pub fn parse(&self, data: &[u8]) -> Result<TorrentMetadata, MetadataError> {
        let size = self.total_length(data)
            .ok_or_else(|| MetadataError::Malformed("no length key found".to_string()))?;

        Ok(TorrentMetadata {
            name: self.string_value(&self.name, data).filter(|name| !name.trim().is_empty()),
            size: Some(size),
            creation_date: self.creation_date(data),
            imdb: self.imdb(data),
        })
    }

    fn total_length(&self, data: &[u8]) -> Option<i64> {
        let total = self.length
            .captures_iter(data)
            .filter_map(|captures| parse_number(&captures[1]))
            .fold(0i64, i64::saturating_add);
        (total > 0).then_some(total)
    }

    fn creation_date(&self, data: &[u8]) -> Option<i64> {
        let captures = self.creation_date.captures(data)?;
        parse_number(&captures[1]).filter(|timestamp| CREATION_DATE_RANGE.contains(timestamp))
    }

    fn imdb(&self, data: &[u8]) -> Option<String> {
        for key in &self.imdb_keys {
            let Some(value) = self.string_value(key, data) else {
                continue;
            };
            let value = value.trim();
            if self.imdb_id.is_match(value.as_bytes()) {
                return Some(value.to_string());
            }
            if let Some(captures) = self.imdb_url.captures(value.as_bytes()) {
                return Some(String::from_utf8_lossy(&captures[1]).into_owned());
            }
        }
        None
    }

    /// Reads a `<len>:<bytes>` string whose key and length `pattern` matched.
    fn string_value(&self, pattern: &Regex, data: &[u8]) -> Option<String> {
        let captures = pattern.captures(data)?;
        let length = usize::try_from(parse_number(&captures[1])?).ok()?;
        let start = captures.get(0)?.end();
        let value = data.get(start..start.checked_add(length)?)?;
        Some(String::from_utf8_lossy(value).into_owned())
    }
}

fn parse_number(digits: &[u8]) -> Option<i64> {
    std::str::from_utf8(digits).ok()?.parse().ok()
}
