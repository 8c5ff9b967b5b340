use crate::udp::enums::scrape_error::ScrapeError;

impl ScrapeError {
    /// Log class of the failure: `dns`, `timeout` or `other`.
    pub fn class(&self) -> &'static str {
        match self {
            ScrapeError::Dns { .. } => "dns",
            ScrapeError::Timeout { .. } => "timeout",
            _ => "other",
        }
    }
}
