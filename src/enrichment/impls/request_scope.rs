use crate::cache::structs::cache_store::CacheStore;
use crate::enrichment::structs::enrichment_context::EnrichmentContext;
use crate::enrichment::structs::request_scope::RequestScope;
use crate::links::structs::link_resolver::LinkResolver;
use crate::metadata::structs::metadata_fetcher::MetadataFetcher;
use crate::tracker::structs::tracker_service::TrackerService;

impl RequestScope {
    pub fn new(context: &EnrichmentContext) -> RequestScope {
        let config = &context.config;
        let store = CacheStore::for_request(context.shared_cache.clone(), config.cache_ttl.clone());
        RequestScope {
            metadata: MetadataFetcher::new(
                &config.metadata,
                context.metadata_provider.clone(),
                context.metadata_bucket.clone(),
                context.metadata_locks.clone(),
                store.clone(),
            ),
            trackers: TrackerService::new(&config.tracker_scrape, context.http_client.clone(), store.clone()),
            links: LinkResolver::new(
                &config.link_resolver,
                context.redirect_client.clone(),
                context.link_limiter.clone(),
                context.page_scanner.clone(),
                store.clone(),
            ),
            store,
        }
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    pub fn metadata(&self) -> &MetadataFetcher {
        &self.metadata
    }

    pub fn trackers(&self) -> &TrackerService {
        &self.trackers
    }

    pub fn links(&self) -> &LinkResolver {
        &self.links
    }
}
