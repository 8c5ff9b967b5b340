use serde::{Deserialize, Serialize};
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::cache_ttl_config::CacheTtlConfig;
use crate::config::structs::link_resolver_config::LinkResolverConfig;
use crate::config::structs::metadata_config::MetadataConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_scrape_config::TrackerScrapeConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub cache_ttl: CacheTtlConfig,
    #[serde(default)]
    pub tracker_scrape: TrackerScrapeConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub link_resolver: LinkResolverConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig
}
