use std::time::Duration;
use crate::metadata::structs::torrent_header_parser::TorrentHeaderParser;

/// Downloads the head of a `.torrent` file with HTTP range requests.
///
/// Chunks start at 128 KiB and double up to 256 KiB; at most 512 KiB or
/// eight requests are spent per URL. Reading stops as soon as the `pieces`
/// key shows up, everything needed sits before it.
pub struct HttpMetadataProvider {
    pub(crate) client: reqwest::Client,
    pub(crate) endpoint: String,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) parser: TorrentHeaderParser,
}
