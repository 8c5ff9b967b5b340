use std::collections::HashMap;
use futures_util::StreamExt;
use futures_util::stream;
use log::debug;
use crate::cache::structs::cache_store::CacheStore;
use crate::config::structs::tracker_scrape_config::TrackerScrapeConfig;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_count::PeerCount;
use crate::tracker::structs::tracker_list_provider::TrackerListProvider;
use crate::tracker::structs::tracker_service::TrackerService;
use crate::tracker::tracker::merge_trackers;
use crate::udp::enums::probe_outcome::ProbeOutcome;
use crate::udp::structs::udp_tracker_client::UdpTrackerClient;

impl TrackerService {
    pub fn new(config: &TrackerScrapeConfig, http_client: reqwest::Client, store: CacheStore) -> TrackerService {
        TrackerService {
            client: UdpTrackerClient::from_config(config),
            list_provider: TrackerListProvider::new(config, http_client, store.clone()),
            store,
            static_trackers: config.static_trackers.clone(),
            max_trackers: config.max_trackers,
            workers: config.workers.max(1),
        }
    }

    pub fn list_provider(&self) -> &TrackerListProvider {
        &self.list_provider
    }

    pub async fn get_peers(&self, info_hash: InfoHash, trackers: Vec<String>) -> PeerCount {
        let mut request = HashMap::new();
        request.insert(info_hash, trackers);
        self.get_peers_bulk(request).await.remove(&info_hash).unwrap_or_default()
    }

    /// Peer counts for every requested info hash. Hashes nobody could answer
    /// for map to `(0, 0)`.
    #[tracing::instrument(skip(self, requests), level = "debug")]
    pub async fn get_peers_bulk(&self, requests: HashMap<InfoHash, Vec<String>>) -> HashMap<InfoHash, PeerCount> {
        let mut results = HashMap::with_capacity(requests.len());
        let mut todo = Vec::new();

        for (info_hash, trackers) in requests {
            match self.store.get_tracker_peers(&info_hash).await {
                Some(peers) => {
                    results.insert(info_hash, peers);
                }
                None => todo.push((info_hash, trackers)),
            }
        }
        debug!("[TRACKERS] {} cached, {} to scrape", results.len(), todo.len());
        if todo.is_empty() {
            return results;
        }

        let dynamic = self.list_provider.get_trackers().await;
        let dynamic = dynamic.as_slice();

        let scraped: Vec<(InfoHash, Option<PeerCount>)> = stream::iter(todo)
            .map(|(info_hash, trackers)| async move {
                let candidates = merge_trackers(&trackers, dynamic, &self.static_trackers, self.max_trackers);
                (info_hash, self.scrape_info_hash(&info_hash, &candidates).await)
            })
            .buffer_unordered(self.workers)
            .collect()
            .await;

        for (info_hash, peers) in scraped {
            match peers {
                Some(peers) => {
                    self.store.set_tracker_peers(&info_hash, peers).await;
                    results.insert(info_hash, peers);
                }
                None => {
                    results.insert(info_hash, PeerCount::default());
                }
            }
        }
        results
    }

    /// First nonzero answer wins; otherwise the first answered zero.
    /// `None` when no tracker answered at all.
    async fn scrape_info_hash(&self, info_hash: &InfoHash, trackers: &[String]) -> Option<PeerCount> {
        let mut first_answer: Option<PeerCount> = None;

        for tracker in trackers {
            match self.client.probe(tracker, info_hash).await {
                ProbeOutcome::Success(peers) if peers.has_peers() => {
                    debug!(
                        "[TRACKERS] {} via {} (S:{} L:{})",
                        info_hash, tracker, peers.seeders, peers.leechers
                    );
                    return Some(peers);
                }
                ProbeOutcome::Success(peers) => {
                    first_answer.get_or_insert(peers);
                }
                failure => {
                    let class = failure.failure_class().unwrap_or("other");
                    match &failure {
                        ProbeOutcome::Unavailable(error) => debug!("[TRACKERS] {} unavailable ({}): {}", tracker, class, error),
                        ProbeOutcome::ProtocolError(message) => debug!("[TRACKERS] {} did not answer ({}): {}", tracker, class, message),
                        _ => debug!("[TRACKERS] {} unavailable ({})", tracker, class),
                    }
                }
            }
        }
        first_answer
    }
}
