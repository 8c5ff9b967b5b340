use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use log::debug;
use tokio::net::UdpSocket;
use crate::config::structs::tracker_scrape_config::TrackerScrapeConfig;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_count::PeerCount;
use crate::udp::enums::probe_outcome::ProbeOutcome;
use crate::udp::enums::request::Request;
use crate::udp::enums::response::Response;
use crate::udp::enums::scrape_error::ScrapeError;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::structs::udp_tracker_client::UdpTrackerClient;
use crate::udp::udp::{parse_tracker_url, MAX_PACKET_SIZE};

const DNS_TIMEOUT: Duration = Duration::from_secs(5);

impl UdpTrackerClient {
    pub fn new(timeout: Duration, retries: u32) -> UdpTrackerClient {
        UdpTrackerClient { timeout, retries }
    }

    pub fn from_config(config: &TrackerScrapeConfig) -> UdpTrackerClient {
        UdpTrackerClient::new(Duration::from_millis(config.timeout_ms), config.retries)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Scrapes one torrent from one tracker and returns `(leechers, seeders)`.
    #[tracing::instrument(skip(self, info_hash), level = "debug")]
    pub async fn scrape(&self, tracker_url: &str, info_hash: &[u8]) -> Result<(u32, u32), ScrapeError> {
        let info_hash = InfoHash::try_from(info_hash)
            .map_err(|error| ScrapeError::InvalidInput(error.to_string()))?;
        let (host, port) = parse_tracker_url(tracker_url)?;
        let address = resolve(&host, port).await?;

        let bind_address: SocketAddr = if address.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(bind_address).await?;
        socket.connect(address).await?;

        let connection_id = self.connect(&socket).await?;
        let peers = self.scrape_torrent(&socket, connection_id, info_hash).await?;
        debug!("[UDP] {} answered L:{} S:{}", tracker_url, peers.0, peers.1);
        Ok(peers)
    }

    /// Same as [`scrape`](Self::scrape), folded into a [`ProbeOutcome`].
    pub async fn probe(&self, tracker_url: &str, info_hash: &InfoHash) -> ProbeOutcome {
        self.scrape(tracker_url, &info_hash.0)
            .await
            .map(PeerCount::from)
            .into()
    }

    async fn connect(&self, socket: &UdpSocket) -> Result<ConnectionId, ScrapeError> {
        let transaction_id = TransactionId::random();
        let packet = Request::from(ConnectRequest { transaction_id }).write_to_vec()?;

        match self.exchange(socket, &packet, "connect").await? {
            Response::Connect(r) if r.transaction_id == transaction_id => Ok(r.connection_id),
            Response::Connect(_) => Err(ScrapeError::Protocol("connect transaction id mismatch".to_string())),
            Response::Error(r) => Err(ScrapeError::Protocol(format!("tracker refused connect: {}", r.message))),
            Response::Scrape(_) => Err(ScrapeError::Protocol("unexpected action in connect reply".to_string())),
        }
    }

    async fn scrape_torrent(&self, socket: &UdpSocket, connection_id: ConnectionId, info_hash: InfoHash) -> Result<(u32, u32), ScrapeError> {
        let transaction_id = TransactionId::random();
        let packet = Request::from(ScrapeRequest {
            connection_id,
            transaction_id,
            info_hashes: vec![info_hash],
        }).write_to_vec()?;

        match self.exchange(socket, &packet, "scrape").await? {
            Response::Scrape(r) if r.transaction_id == transaction_id => match r.torrent_stats.first() {
                Some(stats) => Ok((stats.leechers, stats.seeders)),
                None => Err(ScrapeError::Protocol("scrape reply carries no statistics".to_string())),
            },
            Response::Scrape(_) => Err(ScrapeError::Protocol("scrape transaction id mismatch".to_string())),
            Response::Error(r) => Err(ScrapeError::Protocol(format!("tracker refused scrape: {}", r.message))),
            Response::Connect(_) => Err(ScrapeError::Protocol("unexpected action in scrape reply".to_string())),
        }
    }

    /// Sends `packet` and waits for one reply, resending the identical
    /// packet on every timeout until the retries are spent.
    async fn exchange(&self, socket: &UdpSocket, packet: &[u8], phase: &'static str) -> Result<Response, ScrapeError> {
        let mut buffer = [0u8; MAX_PACKET_SIZE];
        let attempts = self.retries + 1;
        for attempt in 1..=attempts {
            socket.send(packet).await?;
            match tokio::time::timeout(self.timeout, socket.recv(&mut buffer)).await {
                Err(_) => {
                    debug!("[UDP] {} attempt {}/{} timed out", phase, attempt, attempts);
                }
                Ok(Err(error)) => return Err(ScrapeError::Io(error)),
                Ok(Ok(size)) => {
                    return Response::from_bytes(&buffer[..size])
                        .map_err(|error| ScrapeError::Protocol(format!("malformed {phase} reply: {error}")));
                }
            }
        }
        Err(ScrapeError::Timeout { phase, attempts })
    }
}

async fn resolve(host: &str, port: u16) -> Result<SocketAddr, ScrapeError> {
    let dns_error = |reason: String| ScrapeError::Dns { host: host.to_string(), reason };
    let mut addresses = match tokio::time::timeout(DNS_TIMEOUT, tokio::net::lookup_host((host, port))).await {
        Err(_) => return Err(dns_error("lookup timed out".to_string())),
        Ok(Err(error)) => return Err(dns_error(error.to_string())),
        Ok(Ok(addresses)) => addresses,
    };
    addresses.next().ok_or_else(|| dns_error("no address associated with hostname".to_string()))
}
