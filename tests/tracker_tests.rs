mod common;

use common::{create_test_config, random_info_hash, FakeUdpTracker, TrackerBehaviour};
use proptest::prelude::*;
use std::collections::HashMap;
use torrent_enricher::cache::structs::cache_store::CacheStore;
use torrent_enricher::config::structs::cache_ttl_config::CacheTtlConfig;
use torrent_enricher::tracker::structs::peer_count::PeerCount;
use torrent_enricher::tracker::structs::tracker_service::TrackerService;
use torrent_enricher::tracker::tracker::{merge_trackers, normalize_tracker};

fn create_test_service() -> TrackerService {
    let config = create_test_config();
    TrackerService::new(&config.tracker_scrape, reqwest::Client::new(), CacheStore::local(CacheTtlConfig::default()))
}

#[tokio::test]
async fn test_tracker_bulk_lookup_is_cached() {
    let tracker = FakeUdpTracker::start(TrackerBehaviour::Answer { seeders: 10, completed: 2, leechers: 3 }).await;
    let service = create_test_service();
    let info_hash = random_info_hash();

    let mut requests = HashMap::new();
    requests.insert(info_hash, vec![tracker.url()]);
    let first = service.get_peers_bulk(requests.clone()).await;
    assert_eq!(first.get(&info_hash), Some(&PeerCount { leechers: 3, seeders: 10 }));
    let sent = tracker.packet_count();
    assert_eq!(sent, 2);

    let second = service.get_peers_bulk(requests).await;
    assert_eq!(second.get(&info_hash), Some(&PeerCount { leechers: 3, seeders: 10 }));
    assert_eq!(tracker.packet_count(), sent, "A cached hash must not be scraped again");
}

#[tokio::test]
async fn test_tracker_first_nonzero_answer_wins() {
    let empty = FakeUdpTracker::start(TrackerBehaviour::Answer { seeders: 0, completed: 2, leechers: 0 }).await;
    let busy = FakeUdpTracker::start(TrackerBehaviour::Answer { seeders: 7, completed: 2, leechers: 2 }).await;
    let service = create_test_service();
    let info_hash = random_info_hash();

    let peers = service.get_peers(info_hash, vec![empty.url(), busy.url()]).await;

    assert_eq!(peers, PeerCount { leechers: 2, seeders: 7 });
    assert_eq!(empty.packet_count(), 2);
    assert_eq!(busy.packet_count(), 2);
}

#[tokio::test]
async fn test_tracker_stops_at_first_nonzero_answer() {
    let busy = FakeUdpTracker::start(TrackerBehaviour::Answer { seeders: 7, completed: 2, leechers: 2 }).await;
    let never_asked = FakeUdpTracker::start(TrackerBehaviour::Answer { seeders: 1, completed: 2, leechers: 1 }).await;
    let service = create_test_service();

    let peers = service.get_peers(random_info_hash(), vec![busy.url(), never_asked.url()]).await;

    assert_eq!(peers, PeerCount { leechers: 2, seeders: 7 });
    assert_eq!(never_asked.packet_count(), 0);
}

#[tokio::test]
async fn test_tracker_all_zero_answers_are_cached() {
    let empty = FakeUdpTracker::start(TrackerBehaviour::Answer { seeders: 0, completed: 2, leechers: 0 }).await;
    let service = create_test_service();
    let info_hash = random_info_hash();

    assert_eq!(service.get_peers(info_hash, vec![empty.url()]).await, PeerCount::default());
    assert_eq!(service.get_peers(info_hash, vec![empty.url()]).await, PeerCount::default());
    assert_eq!(empty.packet_count(), 2, "A zero answer is still an answer and gets cached");
}

#[tokio::test]
async fn test_tracker_unanswered_hash_is_not_cached() {
    let silent = FakeUdpTracker::start(TrackerBehaviour::Silent).await;
    let service = create_test_service();
    let info_hash = random_info_hash();

    assert_eq!(service.get_peers(info_hash, vec![silent.url()]).await, PeerCount::default());
    let sent = silent.packet_count();
    assert_eq!(sent, 1);
    assert_eq!(service.get_peers(info_hash, vec![silent.url()]).await, PeerCount::default());
    assert_eq!(silent.packet_count(), sent + 1, "Failures are retried on the next lookup");
}

#[tokio::test]
async fn test_tracker_http_trackers_are_skipped() {
    let service = create_test_service();
    let peers = service.get_peers(random_info_hash(), vec!["http://127.0.0.1:9/announce".to_string()]).await;
    assert_eq!(peers, PeerCount::default());
}

proptest! {
    #[test]
    fn prop_normalize_tracker_is_idempotent(url in "(udp|http|https|ftp)://[a-z]{1,12}(\\.[a-z]{2,4})?(:[0-9]{1,5})?(/anunciar|/anunc|/announce)?") {
        if let Some(once) = normalize_tracker(&url) {
            prop_assert_eq!(normalize_tracker(&once), Some(once.clone()));
        } else {
            prop_assert!(url.starts_with("ftp://"));
        }
    }

    #[test]
    fn prop_merge_trackers_is_unique_udp_and_capped(
        record in prop::collection::vec("udp://[a-c]{1,2}:[1-3]", 0..6),
        dynamic in prop::collection::vec("(udp|http)://[a-c]{1,2}:[1-3]", 0..6),
        cap in 0usize..5,
    ) {
        let merged = merge_trackers(&record, &dynamic, &[], cap);
        let mut seen = std::collections::HashSet::new();
        for url in &merged {
            prop_assert!(url.starts_with("udp://"));
            prop_assert!(seen.insert(url.clone()));
        }
        if cap > 0 {
            prop_assert!(merged.len() <= cap);
        }
    }
}
