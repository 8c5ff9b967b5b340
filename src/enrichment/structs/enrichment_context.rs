use std::sync::Arc;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::config::structs::configuration::Configuration;
use crate::links::structs::page_scanner::PageScanner;
use crate::metadata::structs::hash_locks::HashLocks;
use crate::metadata::traits::metadata_provider::MetadataProvider;
use crate::resilience::structs::link_limiter::LinkLimiter;
use crate::resilience::structs::token_bucket::TokenBucket;

/// Built once per process and shared by every request.
pub struct EnrichmentContext {
    pub(crate) config: Arc<Configuration>,
    /// `None` when no shared store was configured or it was unreachable at
    /// startup; decided once for the process lifetime.
    pub(crate) shared_cache: Option<Arc<CacheConnector>>,
    pub(crate) http_client: reqwest::Client,
    pub(crate) redirect_client: reqwest::Client,
    pub(crate) metadata_provider: Arc<dyn MetadataProvider>,
    pub(crate) metadata_bucket: Arc<TokenBucket>,
    pub(crate) metadata_locks: Arc<HashLocks>,
    pub(crate) link_limiter: Arc<LinkLimiter>,
    pub(crate) page_scanner: PageScanner,
}
