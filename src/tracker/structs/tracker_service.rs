use crate::cache::structs::cache_store::CacheStore;
use crate::tracker::structs::tracker_list_provider::TrackerListProvider;
use crate::udp::structs::udp_tracker_client::UdpTrackerClient;

/// Bulk peer-count lookups over UDP trackers.
///
/// Cached counts are answered straight from the store. Every miss becomes
/// one task; up to `workers` tasks run at once and each task probes its
/// trackers one at a time.
pub struct TrackerService {
    pub(crate) client: UdpTrackerClient,
    pub(crate) list_provider: TrackerListProvider,
    pub(crate) store: CacheStore,
    pub(crate) static_trackers: Vec<String>,
    pub(crate) max_trackers: usize,
    pub(crate) workers: usize,
}
