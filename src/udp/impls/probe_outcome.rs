use crate::tracker::structs::peer_count::PeerCount;
use crate::udp::enums::probe_outcome::ProbeOutcome;
use crate::udp::enums::scrape_error::ScrapeError;

impl From<Result<PeerCount, ScrapeError>> for ProbeOutcome {
    fn from(result: Result<PeerCount, ScrapeError>) -> Self {
        match result {
            Ok(peers) => ProbeOutcome::Success(peers),
            Err(ScrapeError::Timeout { .. }) => ProbeOutcome::Timeout,
            Err(ScrapeError::Protocol(message)) => ProbeOutcome::ProtocolError(message),
            Err(error) => ProbeOutcome::Unavailable(error),
        }
    }
}

impl ProbeOutcome {
    pub fn peers(&self) -> Option<PeerCount> {
        match self {
            ProbeOutcome::Success(peers) => Some(*peers),
            _ => None,
        }
    }

    /// Log class of a failed probe, `None` on success.
    pub fn failure_class(&self) -> Option<&'static str> {
        match self {
            ProbeOutcome::Success(_) => None,
            ProbeOutcome::Timeout => Some("timeout"),
            ProbeOutcome::ProtocolError(_) => Some("other"),
            ProbeOutcome::Unavailable(error) => Some(error.class()),
        }
    }
}
