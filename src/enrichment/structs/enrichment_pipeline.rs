use crate::enrichment::structs::request_scope::RequestScope;

pub struct EnrichmentPipeline {
    pub(crate) scope: RequestScope,
    pub(crate) metadata_enabled: bool,
    pub(crate) trackers_enabled: bool,
    pub(crate) link_workers: usize,
}
