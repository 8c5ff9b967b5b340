use std::time::Duration;
use torrent_enricher::cache::structs::cache_store::CacheStore;
use torrent_enricher::config::structs::cache_ttl_config::CacheTtlConfig;
use torrent_enricher::config::structs::tracker_scrape_config::TrackerScrapeConfig;
use torrent_enricher::resilience::enums::failure_kind::FailureKind;
use torrent_enricher::tracker::structs::tracker_list_provider::TrackerListProvider;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TRACKER_BODY: &str = "udp://tracker.one.example:1337/announce\nudp://tracker.two.example:6969/announce\n";

fn create_provider(server: &MockServer, paths: &[&str], store: CacheStore) -> TrackerListProvider {
    let config = TrackerScrapeConfig {
        list_sources: paths.iter().map(|path| format!("{}{}", server.uri(), path)).collect(),
        list_source_timeout: 1,
        ..TrackerScrapeConfig::default()
    };
    TrackerListProvider::new(&config, reqwest::Client::new(), store)
}

async fn mount_list(server: &MockServer, route: &str, response: ResponseTemplate, hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .expect(hits)
        .mount(server)
        .await;
}

fn expected_trackers() -> Vec<String> {
    vec![
        "udp://tracker.one.example:1337/announce".to_string(),
        "udp://tracker.two.example:6969/announce".to_string(),
    ]
}

#[tokio::test]
async fn test_tracker_list_falls_through_to_next_mirror() {
    let server = MockServer::start().await;
    mount_list(&server, "/first.txt", ResponseTemplate::new(500), 1).await;
    mount_list(&server, "/second.txt", ResponseTemplate::new(200).set_body_string(TRACKER_BODY), 1).await;
    let provider = create_provider(&server, &["/first.txt", "/second.txt"], CacheStore::local(CacheTtlConfig::default()));

    assert_eq!(provider.get_trackers().await, expected_trackers());
    assert!(!provider.breaker().is_open().await, "Server errors never count towards the tracker circuit");
}

#[tokio::test]
async fn test_tracker_list_is_cached_after_success() {
    let server = MockServer::start().await;
    mount_list(&server, "/list.txt", ResponseTemplate::new(200).set_body_string(TRACKER_BODY), 1).await;
    let store = CacheStore::local(CacheTtlConfig::default());
    let provider = create_provider(&server, &["/list.txt"], store.clone());

    assert_eq!(provider.get_trackers().await, expected_trackers());
    assert_eq!(provider.get_trackers().await, expected_trackers());
    assert_eq!(store.get_tracker_list().await, Some(expected_trackers()));
}

#[tokio::test]
async fn test_tracker_list_success_clears_timeouts() {
    let server = MockServer::start().await;
    mount_list(&server, "/slow.txt", ResponseTemplate::new(200).set_body_string(TRACKER_BODY).set_delay(Duration::from_secs(2)), 1).await;
    mount_list(&server, "/fast.txt", ResponseTemplate::new(200).set_body_string(TRACKER_BODY), 1).await;
    let provider = create_provider(&server, &["/slow.txt", "/fast.txt"], CacheStore::local(CacheTtlConfig::default()));

    assert_eq!(provider.get_trackers().await, expected_trackers());
    assert_eq!(provider.breaker().failure_count(FailureKind::Timeout).await, 0);
}

#[tokio::test]
async fn test_tracker_list_timeouts_open_the_circuit() {
    let server = MockServer::start().await;
    let slow = ResponseTemplate::new(200).set_body_string(TRACKER_BODY).set_delay(Duration::from_secs(2));
    for route in ["/a.txt", "/b.txt", "/c.txt"] {
        mount_list(&server, route, slow.clone(), 1).await;
    }
    let provider = create_provider(&server, &["/a.txt", "/b.txt", "/c.txt"], CacheStore::local(CacheTtlConfig::default()));

    assert!(provider.get_trackers().await.is_empty());
    assert!(provider.breaker().is_open().await);
    assert_eq!(provider.breaker().key(), "circuit:tracker");

    assert!(provider.get_trackers().await.is_empty());
    assert_eq!(server.received_requests().await.unwrap().len(), 3, "An open circuit must not reach the mirrors");
}

#[tokio::test]
async fn test_tracker_list_body_is_normalized() {
    let server = MockServer::start().await;
    let body = "# best trackers\n\
        udp://tracker.one.example:1337/announce\n\
        \n\
        \x20 udp://Tracker.Two.Example:6969/anunciar \x20\n\
        HTTP://tracker.three.example/Anunc\n\
        wss://tracker.four.example\n\
        udp://tracker.one.example:1337/announce\n";
    mount_list(&server, "/list.txt", ResponseTemplate::new(200).set_body_string(body), 1).await;
    let provider = create_provider(&server, &["/list.txt"], CacheStore::local(CacheTtlConfig::default()));

    assert_eq!(
        provider.get_trackers().await,
        vec![
            "udp://tracker.one.example:1337/announce".to_string(),
            "udp://Tracker.Two.Example:6969/announce".to_string(),
            "HTTP://tracker.three.example/announce".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_tracker_list_open_circuit_skips_mirrors() {
    let server = MockServer::start().await;
    mount_list(&server, "/list.txt", ResponseTemplate::new(200).set_body_string(TRACKER_BODY), 0).await;
    let provider = create_provider(&server, &["/list.txt"], CacheStore::local(CacheTtlConfig::default()));
    provider.breaker().open().await;

    assert!(provider.get_trackers().await.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}
