mod common;

use common::{create_test_config, create_test_context, magnet_for, random_info_hash, CountingProvider};
use std::collections::HashMap;
use std::sync::Arc;
use torrent_enricher::enrichment::structs::enrichment_context::EnrichmentContext;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_link_context() -> EnrichmentContext {
    create_test_context(create_test_config(), Arc::new(CountingProvider::new(HashMap::new())))
}

fn redirect_to(location: &str) -> ResponseTemplate {
    ResponseTemplate::new(302).insert_header("Location", location)
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).insert_header("Content-Type", "text/html").set_body_string(body)
}

#[tokio::test]
async fn test_link_redirect_chain_to_page_magnet() {
    let magnet = magnet_for(&random_info_hash(), &[]);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(redirect_to("/middle"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/middle"))
        .and(header("referer", format!("{}/start", server.uri()).as_str()))
        .respond_with(html_page("<html><head><meta http-equiv=\"refresh\" content=\"0; url=/final\"></head></html>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/final"))
        .respond_with(html_page(&format!("<a class=\"btn\" href='{magnet}'>magnet</a>")))
        .expect(1)
        .mount(&server)
        .await;
    let context = create_link_context();
    let scope = context.request_scope();

    let resolved = scope.links().resolve(&format!("{}/start", server.uri()), None).await;

    assert_eq!(resolved.as_deref(), Some(magnet.as_str()));
    let requests = server.received_requests().await.unwrap();
    let paths: Vec<&str> = requests.iter().map(|request| request.url.path()).collect();
    assert_eq!(paths, vec!["/start", "/middle", "/final"]);
}

#[tokio::test]
async fn test_link_redirect_straight_to_magnet() {
    let magnet = magnet_for(&random_info_hash(), &[]);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/go"))
        .respond_with(redirect_to(&magnet))
        .expect(1)
        .mount(&server)
        .await;
    let context = create_link_context();
    let scope = context.request_scope();

    let resolved = scope.links().resolve(&format!("{}/go", server.uri()), None).await;

    assert_eq!(resolved.as_deref(), Some(magnet.as_str()));
}

#[tokio::test]
async fn test_link_resolution_is_cached() {
    let magnet = magnet_for(&random_info_hash(), &[]);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/go"))
        .respond_with(redirect_to(&magnet))
        .expect(1)
        .mount(&server)
        .await;
    let context = create_link_context();
    let scope = context.request_scope();

    let url = format!("{}/go", server.uri());
    assert!(scope.links().resolve(&url, None).await.is_some());
    assert!(scope.links().resolve(&url, None).await.is_some());
    assert_eq!(scope.store().get_protected_link(&url).await.as_deref(), Some(magnet.as_str()));
}

#[tokio::test]
async fn test_link_error_status_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;
    let context = create_link_context();
    let scope = context.request_scope();

    let url = format!("{}/missing", server.uri());
    assert_eq!(scope.links().resolve(&url, None).await, None);
    assert_eq!(scope.links().resolve(&url, None).await, None);
    assert_eq!(scope.store().get_protected_link(&url).await, None);
}

#[tokio::test]
async fn test_link_page_without_magnet_gives_up() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(html_page("<html><body>nothing to see</body></html>"))
        .expect(1)
        .mount(&server)
        .await;
    let context = create_link_context();
    let scope = context.request_scope();

    assert_eq!(scope.links().resolve(&format!("{}/empty", server.uri()), None).await, None);
}

#[tokio::test]
async fn test_link_redirect_loop_stops_at_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(redirect_to("/b"))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(redirect_to("/a"))
        .expect(2)
        .mount(&server)
        .await;
    let mut config = create_test_config();
    config.link_resolver.max_redirects = 3;
    let context = create_test_context(config, Arc::new(CountingProvider::new(HashMap::new())));
    let scope = context.request_scope();

    assert_eq!(scope.links().resolve(&format!("{}/a", server.uri()), None).await, None);
    server.verify().await;
}
