#[cfg(test)]
mod enrichment_tests {
    use crate::enrichment::structs::torrent_record::TorrentRecord;

    fn hex(byte: u8) -> String {
        hex::encode([byte; 20])
    }

    fn record(info_hash: &str, title: &str) -> TorrentRecord {
        TorrentRecord {
            info_hash: Some(info_hash.to_string()),
            magnet_link: Some(format!("magnet:?xt=urn:btih:{info_hash}")),
            title: title.to_string(),
            ..TorrentRecord::default()
        }
    }

    mod helper_tests {
        use super::{hex, record};
        use crate::enrichment::enrichment::{dedupe_records, is_imdb_id, metadata_date, needs_title};
        use crate::enrichment::structs::torrent_record::TorrentRecord;
        use crate::metadata::structs::torrent_metadata::TorrentMetadata;

        #[test]
        fn test_dedupe_is_case_insensitive_and_keeps_first() {
            let records = vec![
                record(&hex(0xab), "first"),
                record(&hex(0xab).to_uppercase(), "second"),
                record("not-a-hash", "third"),
                record("not-a-hash", "fourth"),
                record(&hex(0xcd), "fifth"),
            ];
            let titles: Vec<String> = dedupe_records(records).into_iter().map(|r| r.title).collect();
            assert_eq!(titles, vec!["first", "third", "fourth", "fifth"]);
        }

        #[test]
        fn test_imdb_ids() {
            assert!(is_imdb_id("tt0111161"));
            assert!(!is_imdb_id("tt"));
            assert!(!is_imdb_id("tt12a"));
            assert!(!is_imdb_id("0111161"));
        }

        #[test]
        fn test_short_titles_need_backfill() {
            assert!(needs_title(&record(&hex(1), "  short  ")));
            assert!(!needs_title(&record(&hex(1), "A Long Enough Title")));
        }

        #[test]
        fn test_metadata_date_format() {
            let metadata = TorrentMetadata { creation_date: Some(1_700_000_000), ..TorrentMetadata::default() };
            assert_eq!(metadata_date(&metadata).as_deref(), Some("2023-11-14T22:13:20Z"));
            assert_eq!(metadata_date(&TorrentMetadata::default()), None);
        }

        #[test]
        fn test_record_json_shape() {
            let parsed: TorrentRecord = serde_json::from_str(
                r#"{"infoHash":"abc","magnetLink":"magnet:?xt=urn:btih:abc","title":"T","seedCount":3}"#,
            ).unwrap();
            assert_eq!(parsed.info_hash.as_deref(), Some("abc"));
            assert_eq!(parsed.seed_count, Some(3));
            assert!(parsed.has_peer_counts());
            let encoded = serde_json::to_string(&TorrentRecord { title: "T".to_string(), ..TorrentRecord::default() }).unwrap();
            assert_eq!(encoded, r#"{"title":"T"}"#);
        }

        #[test]
        fn test_tracker_candidates_fall_back_to_magnet() {
            let mut with_magnet = record(&hex(2), "title");
            with_magnet.magnet_link = Some(format!("magnet:?xt=urn:btih:{}&tr=udp://a.example:80", hex(2)));
            assert_eq!(with_magnet.tracker_candidates(), vec!["udp://a.example:80".to_string()]);
            with_magnet.trackers = vec!["udp://own.example:80".to_string()];
            assert_eq!(with_magnet.tracker_candidates(), vec!["udp://own.example:80".to_string()]);
        }
    }

    mod pipeline_tests {
        use super::{hex, record};
        use crate::config::structs::configuration::Configuration;
        use crate::enrichment::structs::enrichment_context::EnrichmentContext;
        use crate::enrichment::structs::torrent_record::TorrentRecord;
        use crate::metadata::errors::MetadataError;
        use crate::metadata::structs::torrent_metadata::TorrentMetadata;
        use crate::metadata::traits::metadata_provider::MockMetadataProvider;
        use std::sync::Arc;

        fn context(provider: MockMetadataProvider) -> EnrichmentContext {
            let mut config = Configuration::init();
            config.tracker_scrape.list_sources = vec!["http://127.0.0.1:9/list.txt".to_string()];
            EnrichmentContext::with_parts(Arc::new(config), None, reqwest::Client::new(), Arc::new(provider)).unwrap()
        }

        fn html_record(byte: u8, title: &str) -> TorrentRecord {
            TorrentRecord {
                size: Some("1.00 GB".to_string()),
                date: Some("2024-01-01".to_string()),
                ..record(&hex(byte), title)
            }
        }

        #[tokio::test]
        async fn test_duplicates_are_removed() {
            let mut provider = MockMetadataProvider::new();
            provider.expect_fetch().times(0);
            let records = vec![
                record(&hex(1), "Record One Title"),
                record(&hex(2), "Record Two Title"),
                record(&hex(2).to_uppercase(), "Record Two Again"),
                record(&hex(3), "Record Three Title"),
                record(&hex(4), "Record Four Title"),
            ];
            let pipeline = context(provider).pipeline();
            let (enriched, stats) = pipeline.enrich(records, true, true, None, Some("site")).await;
            assert_eq!(enriched.len(), 4);
            assert_eq!(enriched[1].title, "Record Two Title");
            assert_eq!(stats.total, 4);
            assert_eq!(stats.approved, 4);
            assert_eq!(stats.filtered, 0);
            assert_eq!(stats.scraper_name.as_deref(), Some("site"));
        }

        #[tokio::test]
        async fn test_metadata_fills_size_date_and_short_titles() {
            let mut provider = MockMetadataProvider::new();
            provider.expect_fetch().times(2).returning(|info_hash| {
                Ok(TorrentMetadata {
                    name: Some(format!("Name.For.{}", &info_hash.to_string()[..4])),
                    size: Some(1_073_741_824),
                    creation_date: Some(1_700_000_000),
                    imdb: Some("tt7654321".to_string()),
                })
            });
            let records = vec![html_record(5, "short"), html_record(6, "A Long Enough Title")];
            let pipeline = context(provider).pipeline();
            let (enriched, _) = pipeline.enrich(records, false, true, None, None).await;

            assert_eq!(enriched[0].title, "Name.For.0505");
            assert_eq!(enriched[1].title, "A Long Enough Title");
            for record in &enriched {
                assert_eq!(record.size.as_deref(), Some("1.00 GB"));
                assert_eq!(record.date.as_deref(), Some("2023-11-14T22:13:20Z"));
                assert_eq!(record.imdb.as_deref(), Some("tt7654321"));
            }
            assert_eq!(pipeline.scope().metadata().stats().2, 2);
        }

        #[tokio::test]
        async fn test_open_breaker_keeps_page_values() {
            let mut provider = MockMetadataProvider::new();
            provider.expect_fetch().times(0);
            let pipeline = context(provider).pipeline();
            pipeline.scope().metadata().breaker().open().await;

            let records = vec![html_record(7, "short"), html_record(8, "Another Long Title")];
            let (enriched, _) = pipeline.enrich(records.clone(), false, true, None, None).await;
            assert_eq!(enriched.len(), 2);
            for (before, after) in records.iter().zip(&enriched) {
                assert_eq!(before.size, after.size);
                assert_eq!(before.date, after.date);
                assert_eq!(before.title, after.title);
            }
            assert_eq!(pipeline.scope().metadata().stats().2, 0);
        }

        #[tokio::test]
        async fn test_magnet_length_beats_page_size() {
            let mut provider = MockMetadataProvider::new();
            provider.expect_fetch().returning(|_| Err(MetadataError::NotFound));
            let mut with_length = html_record(9, "A Long Enough Title");
            with_length.magnet_link = Some(format!("magnet:?xt=urn:btih:{}&xl=2048", hex(9)));
            let (enriched, _) = context(provider).pipeline().enrich(vec![with_length], false, true, None, None).await;
            assert_eq!(enriched[0].size.as_deref(), Some("2.00 KB"));
            assert_eq!(enriched[0].date.as_deref(), Some("2024-01-01"));
        }

        #[tokio::test]
        async fn test_filter_stats() {
            let provider = MockMetadataProvider::new();
            let records = vec![
                record(&hex(10), "Keep This One"),
                record(&hex(11), "Drop This One"),
                record(&hex(12), "Keep This Too"),
            ];
            let keep: &(dyn Fn(&TorrentRecord) -> bool + Sync) = &|record: &TorrentRecord| record.title.starts_with("Keep");
            let (enriched, stats) = context(provider).pipeline().enrich(records, true, true, Some(keep), Some("s")).await;
            assert_eq!(enriched.len(), 2);
            assert_eq!((stats.total, stats.filtered, stats.approved), (3, 1, 2));
        }

        #[tokio::test]
        async fn test_imdb_is_shared_through_the_cache() {
            let provider = MockMetadataProvider::new();
            let mut tagged = record(&hex(13), "Shared Movie Title 2024");
            tagged.imdb = Some("tt0111161".to_string());
            let untagged = record(&hex(14), "shared  movie title 2024");
            let pipeline = context(provider).pipeline();
            let (enriched, _) = pipeline.enrich(vec![tagged, untagged], true, true, None, None).await;
            assert_eq!(enriched[1].imdb.as_deref(), Some("tt0111161"));

            let store = pipeline.scope().store();
            let info_hash = enriched[0].parsed_info_hash().unwrap();
            assert_eq!(store.get_imdb(&info_hash).await.as_deref(), Some("tt0111161"));
        }

        #[tokio::test]
        async fn test_imdb_is_shared_across_quality_variants() {
            let provider = MockMetadataProvider::new();
            let mut tagged = record(&hex(15), "Show.S01E01.2020.1080p.WEB-DL.x264");
            tagged.imdb = Some("tt0944947".to_string());
            let other_release = record(&hex(16), "Show.S01E01.2020.720p.WEB-DL.x265");
            let next_episode = record(&hex(17), "Show.S01E02.2020.720p.WEB-DL.x265");
            let pipeline = context(provider).pipeline();
            let (enriched, _) = pipeline.enrich(vec![tagged, other_release, next_episode], true, true, None, None).await;
            assert_eq!(enriched[1].imdb.as_deref(), Some("tt0944947"));
            assert_eq!(enriched[2].imdb, None);
        }

        #[tokio::test]
        async fn test_intake_recovers_and_lowercases_hashes() {
            let provider = MockMetadataProvider::new();
            let missing = TorrentRecord {
                magnet_link: Some(format!("magnet:?xt=urn:btih:{}", hex(0xef).to_uppercase())),
                title: "No Hash Given Here".to_string(),
                ..TorrentRecord::default()
            };
            let upper = record(&hex(0xfa).to_uppercase(), "Upper Case Hash");
            let (enriched, _) = context(provider).pipeline().enrich(vec![missing, upper], true, true, None, None).await;
            assert_eq!(enriched[0].info_hash, Some(hex(0xef)));
            assert_eq!(enriched[1].info_hash, Some(hex(0xfa)));
        }

        #[tokio::test]
        async fn test_empty_input() {
            let (enriched, stats) = context(MockMetadataProvider::new()).pipeline().enrich(Vec::new(), false, false, None, None).await;
            assert!(enriched.is_empty());
            assert_eq!(stats.total, 0);
        }
    }
}
