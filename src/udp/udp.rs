use crate::udp::enums::scrape_error::ScrapeError;

pub const PROTOCOL_IDENTIFIER: i64 = 4_497_486_125_440;
pub const ACTION_CONNECT: i32 = 0;
pub const ACTION_SCRAPE: i32 = 2;
pub const ACTION_ERROR: i32 = 3;
pub const MAX_PACKET_SIZE: usize = 1496;
pub const DEFAULT_TRACKER_PORT: u16 = 80;

/// Splits `udp://host[:port][/path]` into host and port.
///
/// The port defaults to 80 when omitted. Bracketed IPv6 hosts are accepted.
pub fn parse_tracker_url(tracker_url: &str) -> Result<(String, u16), ScrapeError> {
    let stripped = tracker_url.trim();
    let Some(scheme) = stripped.get(..6) else {
        return Err(ScrapeError::InvalidInput(format!("not a udp tracker: {stripped}")));
    };
    if !scheme.eq_ignore_ascii_case("udp://") {
        return Err(ScrapeError::InvalidInput(format!("not a udp tracker: {stripped}")));
    }
    let authority = stripped[6..].split('/').next().unwrap_or_default();

    let (host, port) = if let Some(rest) = authority.strip_prefix('[') {
        let Some((host, tail)) = rest.split_once(']') else {
            return Err(ScrapeError::InvalidInput(format!("unterminated IPv6 host: {stripped}")));
        };
        (host, tail.strip_prefix(':'))
    } else {
        match authority.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        }
    };

    if host.is_empty() {
        return Err(ScrapeError::InvalidInput(format!("missing host: {stripped}")));
    }
    let port = match port {
        None => DEFAULT_TRACKER_PORT,
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|_| ScrapeError::InvalidInput(format!("invalid port '{raw}': {stripped}")))?,
    };
    Ok((host.to_string(), port))
}
