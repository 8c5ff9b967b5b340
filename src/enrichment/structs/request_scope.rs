use crate::cache::structs::cache_store::CacheStore;
use crate::links::structs::link_resolver::LinkResolver;
use crate::metadata::structs::metadata_fetcher::MetadataFetcher;
use crate::tracker::structs::tracker_service::TrackerService;

/// Everything one inbound request works with, all on the same `CacheStore`.
pub struct RequestScope {
    pub(crate) store: CacheStore,
    pub(crate) metadata: MetadataFetcher,
    pub(crate) trackers: TrackerService,
    pub(crate) links: LinkResolver,
}
