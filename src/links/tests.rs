#[cfg(test)]
mod links_tests {
    const MAGNET: &str = "magnet:?xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a&dn=Some+Movie";

    mod decode_tests {
        use super::MAGNET;
        use crate::links::links::{ad_link_id, decode_ad_link, decode_magnet_layers, is_protected_link, unescape_link};
        use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
        use base64::Engine;

        #[test]
        fn test_single_layer() {
            let id = STANDARD.encode(MAGNET);
            let url = format!("https://systemads.org/get.php?id={id}");
            assert_eq!(decode_ad_link(&url).as_deref(), Some(MAGNET));
        }

        #[test]
        fn test_url_safe_without_padding() {
            let id = URL_SAFE_NO_PAD.encode(format!("{MAGNET}&tr=udp://a.example:80/?x=1"));
            assert!(decode_magnet_layers(&id).is_some_and(|magnet| magnet.ends_with("?x=1")));
        }

        #[test]
        fn test_nested_layers() {
            let twice = STANDARD.encode(STANDARD.encode(MAGNET));
            assert_eq!(decode_magnet_layers(&twice).as_deref(), Some(MAGNET));
            let four = STANDARD.encode(STANDARD.encode(STANDARD.encode(STANDARD.encode(MAGNET))));
            assert_eq!(decode_magnet_layers(&four), None);
        }

        #[test]
        fn test_id_param_extraction() {
            assert_eq!(ad_link_id("https://x.org/get.php?a=1&ID=ab%2Bc+d#frag").as_deref(), Some("ab+c+d"));
            assert_eq!(ad_link_id("https://x.org/get.php?a=1"), None);
            assert_eq!(ad_link_id("https://x.org/get.php"), None);
            assert_eq!(decode_ad_link("https://x.org/get.php?id=bm90IGEgbWFnbmV0"), None);
        }

        #[test]
        fn test_protected_patterns() {
            assert!(is_protected_link("https://site.org/?go=abc"));
            assert!(is_protected_link("https://Encurtador.com.br/xyz"));
            assert!(!is_protected_link("https://site.org/filme-2024/"));
        }

        #[test]
        fn test_unescape_link() {
            assert_eq!(unescape_link(r" https:\/\/a.org\/x?a=1&amp;b=2 "), "https://a.org/x?a=1&b=2");
        }
    }

    mod page_scanner_tests {
        use super::MAGNET;
        use crate::links::enums::page_scan::PageScan;
        use crate::links::structs::page_scanner::PageScanner;
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;

        fn scanner() -> PageScanner {
            PageScanner::new().unwrap()
        }

        #[test]
        fn test_anchor_magnet() {
            let body = format!(r#"<html><a href="{}">download</a></html>"#, MAGNET.replace('&', "&amp;"));
            assert_eq!(scanner().scan(&body), PageScan::Magnet(MAGNET.to_string()));
        }

        #[test]
        fn test_longest_quoted_magnet_wins() {
            let body = format!(r#"<script>var a = "magnet:?xt=short"; var b = '{MAGNET}';</script>"#);
            assert_eq!(scanner().scan(&body), PageScan::Magnet(MAGNET.to_string()));
        }

        #[test]
        fn test_data_attribute_magnet() {
            let body = format!(r#"<body data-download="{}"></body>"#, STANDARD.encode(MAGNET));
            assert_eq!(scanner().scan(&body), PageScan::Magnet(MAGNET.to_string()));
        }

        #[test]
        fn test_next_hops() {
            let anchor = r#"<a id="redirectBtn" href="https://go.example/receber.php?id=9&amp;t=1">ir</a>"#;
            assert_eq!(scanner().scan(anchor), PageScan::Next("https://go.example/receber.php?id=9&t=1".to_string()));

            let meta = r#"<meta http-equiv="refresh" content="0; URL=/step/two">"#;
            assert_eq!(scanner().scan(meta), PageScan::Next("/step/two".to_string()));

            let script = r#"<script>window.location.replace("https:\/\/next.example\/hop");</script>"#;
            assert_eq!(scanner().scan(script), PageScan::Next("https://next.example/hop".to_string()));

            let href = r#"<script>location.href = '/final';</script>"#;
            assert_eq!(scanner().scan(href), PageScan::Next("/final".to_string()));
        }

        #[test]
        fn test_nothing() {
            assert_eq!(scanner().scan("<html><body>nothing here</body></html>"), PageScan::Nothing);
        }
    }

    mod resolver_tests {
        use super::MAGNET;
        use crate::cache::structs::cache_store::CacheStore;
        use crate::config::structs::cache_ttl_config::CacheTtlConfig;
        use crate::config::structs::link_resolver_config::LinkResolverConfig;
        use crate::links::structs::link_resolver::LinkResolver;
        use crate::links::structs::page_scanner::PageScanner;
        use crate::resilience::structs::link_limiter::LinkLimiter;
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;
        use std::sync::Arc;
        use std::time::Duration;

        fn resolver(store: CacheStore) -> LinkResolver {
            let config = LinkResolverConfig::default();
            let client = reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .unwrap();
            let limiter = Arc::new(LinkLimiter::new(config.max_concurrent, Duration::from_millis(config.min_domain_delay_ms)));
            LinkResolver::new(&config, client, limiter, PageScanner::new().unwrap(), store)
        }

        #[tokio::test]
        async fn test_magnet_passes_through() {
            let resolver = resolver(CacheStore::local(CacheTtlConfig::default()));
            assert_eq!(resolver.resolve(MAGNET, None).await.as_deref(), Some(MAGNET));
        }

        #[tokio::test]
        async fn test_cached_link_skips_network() {
            let store = CacheStore::local(CacheTtlConfig::default());
            let url = "http://127.0.0.1:9/protected?protlink=abc";
            store.set_protected_link(url, MAGNET).await;
            assert_eq!(resolver(store).resolve(url, None).await.as_deref(), Some(MAGNET));
        }

        #[tokio::test]
        async fn test_decoded_ad_link_is_cached() {
            let store = CacheStore::local(CacheTtlConfig::default());
            let url = format!("http://127.0.0.1:9/get.php?id={}", STANDARD.encode(MAGNET));
            assert_eq!(resolver(store.clone()).resolve(&url, None).await.as_deref(), Some(MAGNET));
            assert_eq!(store.get_protected_link(&url).await.as_deref(), Some(MAGNET));
        }

        #[tokio::test]
        async fn test_unresolvable_links() {
            let store = CacheStore::local(CacheTtlConfig::default());
            let resolver = resolver(store.clone());
            assert_eq!(resolver.resolve("not a url", None).await, None);
            assert_eq!(resolver.resolve("http://127.0.0.1:9/closed", None).await, None);
            assert_eq!(store.get_protected_link("http://127.0.0.1:9/closed").await, None);
        }

        #[test]
        fn test_slow_domains_get_longer_timeout() {
            let resolver = resolver(CacheStore::local(CacheTtlConfig::default()));
            assert_eq!(resolver.timeout_for("t.co"), Duration::from_secs(10));
            assert_eq!(resolver.timeout_for("www.T.co"), Duration::from_secs(10));
            assert_eq!(resolver.timeout_for("not-t.co"), Duration::from_secs(5));
            assert_eq!(resolver.timeout_for("example.org"), Duration::from_secs(5));
        }
    }
}
