use std::sync::Arc;
use std::time::Duration;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;
use crate::enrichment::structs::enrichment_context::EnrichmentContext;
use crate::enrichment::structs::enrichment_pipeline::EnrichmentPipeline;
use crate::enrichment::structs::request_scope::RequestScope;
use crate::links::structs::page_scanner::PageScanner;
use crate::metadata::structs::hash_locks::HashLocks;
use crate::metadata::structs::http_metadata_provider::HttpMetadataProvider;
use crate::metadata::traits::metadata_provider::MetadataProvider;
use crate::resilience::structs::link_limiter::LinkLimiter;
use crate::resilience::structs::token_bucket::TokenBucket;

impl EnrichmentContext {
    /// Connects the shared store (if configured) and builds the HTTP metadata provider.
    pub async fn new(config: Arc<Configuration>) -> Result<EnrichmentContext, CustomError> {
        let shared_cache = CacheConnector::connect_shared(&config.cache).await.map(Arc::new);
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| CustomError::new(&format!("could not build HTTP client: {e}")))?;
        let provider = HttpMetadataProvider::new(&config.metadata, http_client.clone())
            .map_err(|e| CustomError::new(&format!("could not build metadata parser: {e}")))?;
        EnrichmentContext::with_parts(config, shared_cache, http_client, Arc::new(provider))
    }

    /// Context around an already built shared store and metadata provider.
    pub fn with_parts(
        config: Arc<Configuration>,
        shared_cache: Option<Arc<CacheConnector>>,
        http_client: reqwest::Client,
        metadata_provider: Arc<dyn MetadataProvider>,
    ) -> Result<EnrichmentContext, CustomError> {
        let redirect_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| CustomError::new(&format!("could not build redirect client: {e}")))?;
        let page_scanner = PageScanner::new()
            .map_err(|e| CustomError::new(&format!("could not build page scanner: {e}")))?;
        Ok(EnrichmentContext {
            metadata_bucket: Arc::new(TokenBucket::new(
                config.metadata.bucket_capacity,
                config.metadata.refill_per_second,
            )),
            metadata_locks: Arc::new(HashLocks::new()),
            link_limiter: Arc::new(LinkLimiter::new(
                config.link_resolver.max_concurrent,
                Duration::from_millis(config.link_resolver.min_domain_delay_ms),
            )),
            config,
            shared_cache,
            http_client,
            redirect_client,
            metadata_provider,
            page_scanner,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn has_shared_cache(&self) -> bool {
        self.shared_cache.is_some()
    }

    pub fn request_scope(&self) -> RequestScope {
        RequestScope::new(self)
    }

    /// Pipeline for one request, with a fresh request scope.
    pub fn pipeline(&self) -> EnrichmentPipeline {
        EnrichmentPipeline::new(self)
    }
}
