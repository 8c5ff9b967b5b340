use std::time::Duration;

/// BEP 15 scrape client.
///
/// Holds only the timeout and retry policy, so one instance can be shared
/// by any number of concurrent workers. Each call binds its own socket.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use torrent_enricher::udp::structs::udp_tracker_client::UdpTrackerClient;
///
/// let client = UdpTrackerClient::new(Duration::from_millis(500), 2);
/// let (leechers, seeders) = client.scrape("udp://tracker.opentrackr.org:1337/announce", &info_hash.0).await?;
/// ```
#[derive(Debug, Clone)]
pub struct UdpTrackerClient {
    pub(crate) timeout: Duration,
    pub(crate) retries: u32,
}
