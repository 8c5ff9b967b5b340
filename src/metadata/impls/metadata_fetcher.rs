use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use futures_util::StreamExt;
use futures_util::stream;
use log::debug;
use crate::cache::keys::CIRCUIT_METADATA_KEY;
use crate::cache::structs::cache_store::CacheStore;
use crate::config::structs::metadata_config::MetadataConfig;
use crate::metadata::enums::metadata_failure::MetadataFailure;
use crate::metadata::errors::MetadataError;
use crate::metadata::structs::hash_locks::HashLocks;
use crate::metadata::structs::metadata_fetcher::MetadataFetcher;
use crate::metadata::structs::torrent_metadata::TorrentMetadata;
use crate::metadata::traits::metadata_provider::MetadataProvider;
use crate::resilience::enums::failure_kind::FailureKind;
use crate::resilience::structs::circuit_breaker::CircuitBreaker;
use crate::resilience::structs::circuit_policy::CircuitPolicy;
use crate::resilience::structs::token_bucket::TokenBucket;
use crate::tracker::structs::info_hash::InfoHash;

impl MetadataFetcher {
    pub fn new(
        config: &MetadataConfig,
        provider: Arc<dyn MetadataProvider>,
        bucket: Arc<TokenBucket>,
        locks: Arc<HashLocks>,
        store: CacheStore,
    ) -> MetadataFetcher {
        let policy = CircuitPolicy::metadata(config, store.ttl());
        MetadataFetcher {
            provider,
            breaker: CircuitBreaker::new(CIRCUIT_METADATA_KEY, policy, store.clone()),
            store,
            bucket,
            locks,
            workers: config.workers.max(1),
            cache_hits: AtomicU64::new(0),
            cache_misses: AtomicU64::new(0),
            provider_calls: AtomicU64::new(0),
        }
    }

    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// `(cache hits, cache misses, provider calls)` since construction.
    pub fn stats(&self) -> (u64, u64, u64) {
        (
            self.cache_hits.load(Ordering::Relaxed),
            self.cache_misses.load(Ordering::Relaxed),
            self.provider_calls.load(Ordering::Relaxed),
        )
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn fetch(&self, info_hash: &InfoHash) -> Option<TorrentMetadata> {
        if let Some(metadata) = self.store.get_metadata(info_hash).await {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            return Some(metadata);
        }
        self.cache_misses.fetch_add(1, Ordering::Relaxed);

        if self.breaker.is_open().await {
            debug!("[METADATA] circuit open, skipping {}", info_hash);
            return None;
        }
        if let Some(failure) = self.store.get_metadata_failure(info_hash).await {
            debug!("[METADATA] recent {:?} for {}, skipping", failure, info_hash);
            return None;
        }

        let lock = self.locks.lock_for(info_hash);
        let _guard = lock.lock().await;
        if let Some(metadata) = self.store.get_metadata(info_hash).await {
            return Some(metadata);
        }
        if self.store.get_metadata_failure(info_hash).await.is_some() {
            debug!("[METADATA] {} failed while waiting, skipping", info_hash);
            return None;
        }

        self.bucket.acquire().await;
        self.provider_calls.fetch_add(1, Ordering::Relaxed);
        match self.provider.fetch(info_hash).await {
            Ok(metadata) => {
                debug!("[METADATA] {} size {:?}", info_hash, metadata.size);
                self.store.set_metadata(info_hash, &metadata).await;
                self.breaker.record_success().await;
                Some(metadata)
            }
            Err(error) => {
                self.record_error(info_hash, &error).await;
                None
            }
        }
    }

    async fn record_error(&self, info_hash: &InfoHash, error: &MetadataError) {
        debug!("[METADATA] {} failed: {}", info_hash, error);
        match error {
            MetadataError::Timeout => {
                self.breaker.record_failure(FailureKind::Timeout).await;
                self.store.set_metadata_failure(info_hash, MetadataFailure::Unavailable).await;
            }
            MetadataError::Unavailable => {
                self.breaker.record_failure(FailureKind::Unavailable).await;
                self.store.set_metadata_failure(info_hash, MetadataFailure::Unavailable).await;
            }
            MetadataError::NotFound | MetadataError::Http(_) => {
                self.store.set_metadata_failure(info_hash, MetadataFailure::NotFound).await;
            }
            MetadataError::Transport(_) | MetadataError::Malformed(_) => {}
        }
    }

    /// Fetches every hash with at most `workers` lookups in flight.
    /// Hashes without metadata are absent from the result.
    pub async fn fetch_batch(&self, info_hashes: &[InfoHash]) -> HashMap<InfoHash, TorrentMetadata> {
        let before = self.stats();
        let found: HashMap<InfoHash, TorrentMetadata> = stream::iter(info_hashes.iter().copied())
            .map(|info_hash| async move { (info_hash, self.fetch(&info_hash).await) })
            .buffer_unordered(self.workers)
            .filter_map(|(info_hash, metadata)| async move { metadata.map(|metadata| (info_hash, metadata)) })
            .collect()
            .await;
        let after = self.stats();
        debug!(
            "[METADATA] batch of {}: {} found, {} cache hits, {} misses, {} provider calls",
            info_hashes.len(),
            found.len(),
            after.0 - before.0,
            after.1 - before.1,
            after.2 - before.2
        );
        found
    }
}
