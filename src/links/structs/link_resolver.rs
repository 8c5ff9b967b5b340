use std::sync::Arc;
use std::time::Duration;
use crate::cache::structs::cache_store::CacheStore;
use crate::links::structs::page_scanner::PageScanner;
use crate::resilience::structs::link_limiter::LinkLimiter;

pub struct LinkResolver {
    /// Must not follow redirects on its own, every hop goes through the limiter.
    pub(crate) client: reqwest::Client,
    pub(crate) limiter: Arc<LinkLimiter>,
    pub(crate) store: CacheStore,
    pub(crate) scanner: PageScanner,
    pub(crate) timeout: Duration,
    pub(crate) slow_timeout: Duration,
    pub(crate) slow_domains: Vec<String>,
    pub(crate) max_redirects: usize,
    pub(crate) user_agent: String,
}
