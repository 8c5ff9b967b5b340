use std::collections::HashMap;
use futures_util::StreamExt;
use futures_util::stream;
use log::debug;
use crate::common::common::format_bytes;
use crate::enrichment::enrichment::{dedupe_records, is_imdb_id, metadata_date, needs_title};
use crate::enrichment::structs::enrichment_context::EnrichmentContext;
use crate::enrichment::structs::enrichment_pipeline::EnrichmentPipeline;
use crate::enrichment::structs::filter_stats::FilterStats;
use crate::enrichment::structs::request_scope::RequestScope;
use crate::enrichment::structs::torrent_record::TorrentRecord;
use crate::magnet::structs::magnet_link::MagnetLink;
use crate::metadata::structs::torrent_metadata::TorrentMetadata;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_count::PeerCount;

impl EnrichmentPipeline {
    pub fn new(context: &EnrichmentContext) -> EnrichmentPipeline {
        EnrichmentPipeline {
            scope: RequestScope::new(context),
            metadata_enabled: context.config.metadata.enabled,
            trackers_enabled: context.config.tracker_scrape.enabled,
            link_workers: context.config.link_resolver.max_concurrent.max(1),
        }
    }

    pub fn scope(&self) -> &RequestScope {
        &self.scope
    }

    /// Runs every stage over `records` and returns them in input order,
    /// minus duplicates and whatever `filter` rejected.
    ///
    /// `skip_metadata` turns off title backfill and the metadata batch,
    /// `skip_trackers` the peer-count lookup. Size and date fallbacks still
    /// run so magnet `xl` lengths are applied either way.
    #[tracing::instrument(skip(self, records, filter), level = "debug")]
    pub async fn enrich(
        &self,
        records: Vec<TorrentRecord>,
        skip_metadata: bool,
        skip_trackers: bool,
        filter: Option<&(dyn Fn(&TorrentRecord) -> bool + Sync)>,
        scraper_name: Option<&str>,
    ) -> (Vec<TorrentRecord>, FilterStats) {
        let mut stats = FilterStats {
            scraper_name: scraper_name.map(str::to_string),
            ..FilterStats::default()
        };
        if records.is_empty() {
            return (records, stats);
        }
        let use_metadata = self.metadata_enabled && !skip_metadata;
        let use_trackers = self.trackers_enabled && !skip_trackers;

        let records = self.intake(records).await;
        let mut records = dedupe_records(records);
        if use_metadata {
            self.backfill_titles(&mut records).await;
        }

        stats.total = records.len();
        if let Some(filter) = filter {
            records.retain(|record| filter(record));
        }
        stats.approved = records.len();
        stats.filtered = stats.total - stats.approved;
        debug!(
            "[ENRICH] {}: {} total, {} filtered, {} approved",
            scraper_name.unwrap_or("-"),
            stats.total,
            stats.filtered,
            stats.approved
        );
        if records.is_empty() {
            return (records, stats);
        }

        let (metadata, peers) = tokio::join!(
            async {
                if use_metadata { self.fetch_metadata(&records).await } else { HashMap::new() }
            },
            async {
                if use_trackers { self.fetch_peers(&records).await } else { HashMap::new() }
            },
        );

        for record in records.iter_mut() {
            let info_hash = record.parsed_info_hash();
            let found = info_hash.as_ref().and_then(|info_hash| metadata.get(info_hash));
            self.apply_size(record, found);
            if let Some(date) = found.and_then(metadata_date) {
                record.date = Some(date);
            }
            self.apply_imdb(record, info_hash.as_ref(), found).await;
            if let Some(counts) = info_hash.and_then(|info_hash| peers.get(&info_hash))
                && !record.has_peer_counts() {
                record.leech_count = Some(counts.leechers);
                record.seed_count = Some(counts.seeders);
            }
        }
        (records, stats)
    }

    /// Resolves protected links into magnets and fills in missing info hashes
    /// from them. Hashes end up lowercase.
    async fn intake(&self, mut records: Vec<TorrentRecord>) -> Vec<TorrentRecord> {
        let pending: Vec<(usize, String)> = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| record.pending_link().map(|link| (index, link.to_string())))
            .collect();
        if !pending.is_empty() {
            let resolved: Vec<(usize, Option<String>)> = stream::iter(pending)
                .map(|(index, link)| async move { (index, self.scope.links.resolve(&link, None).await) })
                .buffer_unordered(self.link_workers)
                .collect()
                .await;
            for (index, magnet) in resolved {
                if let Some(magnet) = magnet
                    && let Some(record) = records.get_mut(index) {
                    record.magnet_link = Some(magnet);
                }
            }
        }

        for record in records.iter_mut() {
            let info_hash = record
                .parsed_info_hash()
                .or_else(|| record.magnet().map(|magnet| magnet.info_hash));
            if let Some(info_hash) = info_hash {
                record.info_hash = Some(info_hash.to_string());
            }
        }
        records
    }

    async fn backfill_titles(&self, records: &mut [TorrentRecord]) {
        let wanted: Vec<InfoHash> = records
            .iter()
            .filter(|record| needs_title(record))
            .filter_map(TorrentRecord::parsed_info_hash)
            .collect();
        if wanted.is_empty() {
            return;
        }
        let found = self.scope.metadata.fetch_batch(&wanted).await;
        let mut replaced = 0usize;
        for record in records.iter_mut().filter(|record| needs_title(record)) {
            let name = record
                .parsed_info_hash()
                .and_then(|info_hash| found.get(&info_hash))
                .and_then(TorrentMetadata::usable_name);
            if let Some(name) = name {
                record.title = name.to_string();
                replaced += 1;
            }
        }
        debug!("[ENRICH] backfilled {} of {} short titles", replaced, wanted.len());
    }

    async fn fetch_metadata(&self, records: &[TorrentRecord]) -> HashMap<InfoHash, TorrentMetadata> {
        let wanted: Vec<InfoHash> = records
            .iter()
            .filter(|record| record.magnet_link.as_deref().is_some_and(|link| !link.trim().is_empty()))
            .filter_map(TorrentRecord::parsed_info_hash)
            .collect();
        if wanted.is_empty() {
            return HashMap::new();
        }
        self.scope.metadata.fetch_batch(&wanted).await
    }

    /// Records that already carry counts, or have no trackers at all, are
    /// left out.
    async fn fetch_peers(&self, records: &[TorrentRecord]) -> HashMap<InfoHash, PeerCount> {
        let mut requests: HashMap<InfoHash, Vec<String>> = HashMap::new();
        for record in records {
            if record.has_peer_counts() {
                continue;
            }
            let Some(info_hash) = record.parsed_info_hash() else {
                continue;
            };
            let trackers = record.tracker_candidates();
            if !trackers.is_empty() {
                requests.entry(info_hash).or_default().extend(trackers);
            }
        }
        if requests.is_empty() {
            return HashMap::new();
        }
        self.scope.trackers.get_peers_bulk(requests).await
    }

    /// Metadata size, then the magnet `xl` length, then whatever the page said.
    fn apply_size(&self, record: &mut TorrentRecord, metadata: Option<&TorrentMetadata>) {
        let from_metadata = metadata.and_then(|metadata| metadata.size);
        let from_magnet = || record.magnet().as_ref().and_then(MagnetLink::exact_length);
        if let Some(size) = from_metadata.or_else(from_magnet).map(format_bytes)
            && !size.is_empty() {
            record.size = Some(size);
        }
    }

    /// A valid id already on the record is written back to both IMDB keys.
    /// Otherwise: cache by hash, cache by title, then the metadata's own id.
    async fn apply_imdb(&self, record: &mut TorrentRecord, info_hash: Option<&InfoHash>, metadata: Option<&TorrentMetadata>) {
        let store = &self.scope.store;
        let title = record.title.trim().to_string();
        let title = (!title.is_empty()).then_some(title);

        if let Some(imdb) = record.valid_imdb().map(str::to_string) {
            store.set_imdb(info_hash, title.as_deref(), &imdb).await;
            return;
        }
        if record.imdb.as_deref().is_some_and(|imdb| !imdb.trim().is_empty()) {
            return;
        }

        if let Some(info_hash) = info_hash
            && let Some(imdb) = store.get_imdb(info_hash).await.filter(|imdb| is_imdb_id(imdb)) {
            record.imdb = Some(imdb);
            return;
        }
        if let Some(title) = title.as_deref()
            && let Some(imdb) = store.get_imdb_by_title(title).await.filter(|imdb| is_imdb_id(imdb)) {
            record.imdb = Some(imdb);
            return;
        }
        if let Some(imdb) = metadata.and_then(|metadata| metadata.imdb.as_deref()).filter(|imdb| is_imdb_id(imdb)) {
            store.set_imdb(info_hash, title.as_deref(), imdb).await;
            record.imdb = Some(imdb.to_string());
        }
    }
}
