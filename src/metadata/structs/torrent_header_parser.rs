use regex::bytes::Regex;

/// Compiled patterns for reading facts out of the first few hundred
/// kilobytes of a torrent file without decoding the whole bencode tree.
pub struct TorrentHeaderParser {
    pub(crate) length: Regex,
    pub(crate) name: Regex,
    pub(crate) creation_date: Regex,
    pub(crate) imdb_keys: Vec<Regex>,
    pub(crate) imdb_id: Regex,
    pub(crate) imdb_url: Regex,
}
