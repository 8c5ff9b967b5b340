#![allow(dead_code)]
use async_trait::async_trait;
use rand::RngExt;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::UdpSocket;
use torrent_enricher::config::structs::configuration::Configuration;
use torrent_enricher::enrichment::structs::enrichment_context::EnrichmentContext;
use torrent_enricher::enrichment::structs::torrent_record::TorrentRecord;
use torrent_enricher::metadata::errors::MetadataError;
use torrent_enricher::metadata::structs::torrent_metadata::TorrentMetadata;
use torrent_enricher::metadata::traits::metadata_provider::MetadataProvider;
use torrent_enricher::tracker::structs::info_hash::InfoHash;
use torrent_enricher::udp::enums::request::Request;
use torrent_enricher::udp::enums::response::Response;
use torrent_enricher::udp::structs::connect_response::ConnectResponse;
use torrent_enricher::udp::structs::connection_id::ConnectionId;
use torrent_enricher::udp::structs::scrape_response::ScrapeResponse;
use torrent_enricher::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use torrent_enricher::udp::structs::transaction_id::TransactionId;

/// Unroutable list source, so dynamic tracker lists come back empty.
pub const DEAD_LIST_SOURCE: &str = "http://127.0.0.1:9/trackers.txt";

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let mut bytes = [0u8; 20];
    for byte in bytes.iter_mut() {
        *byte = rng.random::<u8>();
    }
    InfoHash(bytes)
}

/// Defaults with every outbound source pointed away from the network.
pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.tracker_scrape.list_sources = vec![DEAD_LIST_SOURCE.to_string()];
    config.tracker_scrape.static_trackers = Vec::new();
    config.tracker_scrape.timeout_ms = 200;
    config.tracker_scrape.retries = 0;
    config.link_resolver.min_domain_delay_ms = 0;
    config
}

pub fn create_test_context(config: Configuration, provider: Arc<dyn MetadataProvider>) -> EnrichmentContext {
    EnrichmentContext::with_parts(Arc::new(config), None, reqwest::Client::new(), provider).unwrap()
}

pub fn magnet_for(info_hash: &InfoHash, trackers: &[String]) -> String {
    let mut magnet = format!("magnet:?xt=urn:btih:{}", info_hash);
    for tracker in trackers {
        magnet.push_str("&tr=");
        magnet.push_str(tracker);
    }
    magnet
}

pub fn create_test_record(info_hash: &InfoHash, title: &str) -> TorrentRecord {
    TorrentRecord {
        info_hash: Some(info_hash.to_string()),
        magnet_link: Some(magnet_for(info_hash, &[])),
        title: title.to_string(),
        ..TorrentRecord::default()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TrackerBehaviour {
    Answer { seeders: u32, completed: u32, leechers: u32 },
    WrongTransaction,
    Silent,
}

/// Loopback UDP tracker that counts every packet it receives.
pub struct FakeUdpTracker {
    pub address: SocketAddr,
    pub packets: Arc<AtomicUsize>,
}

impl FakeUdpTracker {
    pub async fn start(behaviour: TrackerBehaviour) -> FakeUdpTracker {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let address = socket.local_addr().unwrap();
        let packets = Arc::new(AtomicUsize::new(0));
        let counter = packets.clone();

        tokio::spawn(async move {
            let mut buffer = [0u8; 1496];
            loop {
                let Ok((size, peer)) = socket.recv_from(&mut buffer).await else {
                    return;
                };
                counter.fetch_add(1, Ordering::SeqCst);
                let Ok(request) = Request::from_bytes(&buffer[..size]) else {
                    continue;
                };
                let bytes = match (behaviour, request) {
                    (TrackerBehaviour::Silent, _) => continue,
                    (_, Request::Connect(r)) => Response::Connect(ConnectResponse {
                        connection_id: ConnectionId(0x5eed),
                        transaction_id: r.transaction_id,
                    }).write_to_vec().unwrap(),
                    (TrackerBehaviour::WrongTransaction, Request::Scrape(r)) => Response::Scrape(ScrapeResponse {
                        transaction_id: TransactionId(r.transaction_id.0.wrapping_add(1)),
                        torrent_stats: vec![TorrentScrapeStatistics { seeders: 1, completed: 0, leechers: 1 }],
                    }).write_to_vec().unwrap(),
                    (TrackerBehaviour::Answer { seeders, completed, leechers }, Request::Scrape(r)) => {
                        scrape_reply(r.transaction_id, r.info_hashes.len(), seeders, completed, leechers)
                    }
                };
                let _ = socket.send_to(&bytes, peer).await;
            }
        });

        FakeUdpTracker { address, packets }
    }

    pub fn url(&self) -> String {
        format!("udp://{}/announce", self.address)
    }

    pub fn packet_count(&self) -> usize {
        self.packets.load(Ordering::SeqCst)
    }
}

/// Scrape reply laid out by hand: action, transaction id, then seeders, completed and leechers per hash.
pub fn scrape_reply(transaction_id: TransactionId, hashes: usize, seeders: u32, completed: u32, leechers: u32) -> Vec<u8> {
    let mut reply = Vec::with_capacity(8 + hashes * 12);
    reply.extend_from_slice(&2i32.to_be_bytes());
    reply.extend_from_slice(&transaction_id.0.to_be_bytes());
    for _ in 0..hashes {
        reply.extend_from_slice(&seeders.to_be_bytes());
        reply.extend_from_slice(&completed.to_be_bytes());
        reply.extend_from_slice(&leechers.to_be_bytes());
    }
    reply
}

/// Metadata provider answering from a fixed table and counting calls.
pub struct CountingProvider {
    pub answers: HashMap<InfoHash, Result<TorrentMetadata, MetadataError>>,
    pub calls: AtomicUsize,
}

impl CountingProvider {
    pub fn new(answers: HashMap<InfoHash, Result<TorrentMetadata, MetadataError>>) -> CountingProvider {
        CountingProvider { answers, calls: AtomicUsize::new(0) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataProvider for CountingProvider {
    async fn fetch(&self, info_hash: &InfoHash) -> Result<TorrentMetadata, MetadataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers.get(info_hash).cloned().unwrap_or(Err(MetadataError::NotFound))
    }
}
