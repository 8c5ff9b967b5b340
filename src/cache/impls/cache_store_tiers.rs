use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::cache::keys;
use crate::cache::structs::cache_store::CacheStore;
use crate::common::common::current_time;
use crate::metadata::enums::metadata_failure::MetadataFailure;
use crate::metadata::structs::torrent_metadata::TorrentMetadata;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_count::PeerCount;

impl CacheStore {
    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                debug!("[CACHE] {} holds undecodable data: {}", key, error);
                None
            }
        }
    }

    async fn set_json<T: Serialize>(&self, key: &str, value: &T, ttl: u64) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, &raw, ttl).await,
            Err(error) => debug!("[CACHE] {} could not be encoded: {}", key, error),
        }
    }

    /// Long tier first, then short.
    pub async fn get_html(&self, url: &str) -> Option<String> {
        if let Some(body) = self.get(&keys::html_long_key(url)).await {
            return Some(body);
        }
        self.get(&keys::html_short_key(url)).await
    }

    pub async fn set_html(&self, url: &str, body: &str) {
        self.set(&keys::html_short_key(url), body, self.ttl.html_short).await;
        self.set(&keys::html_long_key(url), body, self.ttl.html_long).await;
    }

    pub async fn get_metadata(&self, info_hash: &InfoHash) -> Option<TorrentMetadata> {
        self.get_json(&keys::metadata_key(info_hash)).await
    }

    pub async fn set_metadata(&self, info_hash: &InfoHash, metadata: &TorrentMetadata) {
        self.set_json(&keys::metadata_key(info_hash), metadata, self.ttl.metadata).await;
    }

    pub async fn get_metadata_failure(&self, info_hash: &InfoHash) -> Option<MetadataFailure> {
        if self.get(&keys::metadata_failure503_key(info_hash)).await.is_some() {
            return Some(MetadataFailure::Unavailable);
        }
        if self.get(&keys::metadata_failure_key(info_hash)).await.is_some() {
            return Some(MetadataFailure::NotFound);
        }
        None
    }

    pub async fn set_metadata_failure(&self, info_hash: &InfoHash, failure: MetadataFailure) {
        let now = current_time().to_string();
        match failure {
            MetadataFailure::NotFound => {
                self.set(&keys::metadata_failure_key(info_hash), &now, self.ttl.metadata_failure).await
            }
            MetadataFailure::Unavailable => {
                self.set(&keys::metadata_failure503_key(info_hash), &now, self.ttl.metadata_failure_503).await
            }
        }
    }

    pub async fn get_tracker_peers(&self, info_hash: &InfoHash) -> Option<PeerCount> {
        let raw = self.hash_get(&keys::tracker_key(info_hash), "peers").await?;
        serde_json::from_str(&raw).ok()
    }

    pub async fn set_tracker_peers(&self, info_hash: &InfoHash, peers: PeerCount) {
        let Ok(encoded) = serde_json::to_string(&peers) else {
            return;
        };
        let now = current_time().to_string();
        let fields = [
            ("peers", encoded),
            ("last_scrape", now.clone()),
            ("created", now),
        ];
        self.hash_set(&keys::tracker_key(info_hash), &fields, self.ttl.tracker_peers).await;
    }

    /// An empty cached list counts as a miss.
    pub async fn get_tracker_list(&self) -> Option<Vec<String>> {
        let trackers: Vec<String> = self.get_json(keys::TRACKER_LIST_KEY).await?;
        (!trackers.is_empty()).then_some(trackers)
    }

    pub async fn set_tracker_list(&self, trackers: &[String]) {
        self.set_json(keys::TRACKER_LIST_KEY, &trackers, self.ttl.tracker_list).await;
    }

    pub async fn get_imdb(&self, info_hash: &InfoHash) -> Option<String> {
        self.get(&keys::imdb_key(info_hash)).await
    }

    /// Looks up by base title, so other releases of the same work match.
    pub async fn get_imdb_by_title(&self, title: &str) -> Option<String> {
        self.get(&keys::imdb_title_key(title)?).await
    }

    pub async fn set_imdb(&self, info_hash: Option<&InfoHash>, title: Option<&str>, imdb: &str) {
        if let Some(info_hash) = info_hash {
            self.set(&keys::imdb_key(info_hash), imdb, self.ttl.imdb).await;
        }
        if let Some(key) = title.and_then(keys::imdb_title_key) {
            self.set(&key, imdb, self.ttl.imdb).await;
        }
    }

    pub async fn get_protected_link(&self, url: &str) -> Option<String> {
        self.get(&keys::protlink_key(url)).await
    }

    pub async fn set_protected_link(&self, url: &str, magnet: &str) {
        self.set(&keys::protlink_key(url), magnet, self.ttl.protected_link).await;
    }

    pub async fn get_solver_session(&self, domain: &str) -> Option<String> {
        self.get(&keys::solver_session_key(domain)).await
    }

    pub async fn set_solver_session(&self, domain: &str, session: &str) {
        self.set(&keys::solver_session_key(domain), session, self.ttl.solver_session).await;
    }
}
