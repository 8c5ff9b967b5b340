use crate::tracker::structs::peer_count::PeerCount;
use crate::udp::enums::scrape_error::ScrapeError;

/// What probing a single tracker produced.
///
/// `Unavailable` covers everything that is neither a reply nor a lost
/// packet: bad URLs, DNS failures and socket errors.
#[derive(Debug)]
pub enum ProbeOutcome {
    Success(PeerCount),
    Timeout,
    ProtocolError(String),
    Unavailable(ScrapeError),
}
