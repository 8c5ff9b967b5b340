use crate::config::structs::cache_ttl_config::CacheTtlConfig;
use crate::config::structs::metadata_config::MetadataConfig;
use crate::config::structs::tracker_scrape_config::TrackerScrapeConfig;
use crate::resilience::enums::failure_kind::FailureKind;
use crate::resilience::structs::circuit_policy::CircuitPolicy;

impl CircuitPolicy {
    /// Tracker list mirrors: only timeouts count.
    pub fn tracker_list(config: &TrackerScrapeConfig, ttl: &CacheTtlConfig) -> CircuitPolicy {
        CircuitPolicy {
            timeout_threshold: config.circuit_threshold,
            unavailable_threshold: 0,
            cooldown: config.circuit_cooldown,
            counter_ttl: ttl.circuit_counter,
        }
    }

    pub fn metadata(config: &MetadataConfig, ttl: &CacheTtlConfig) -> CircuitPolicy {
        CircuitPolicy {
            timeout_threshold: config.timeout_threshold,
            unavailable_threshold: config.unavailable_threshold,
            cooldown: config.circuit_cooldown,
            counter_ttl: ttl.circuit_counter,
        }
    }

    pub fn threshold(&self, kind: FailureKind) -> u64 {
        match kind {
            FailureKind::Timeout => self.timeout_threshold,
            FailureKind::Unavailable => self.unavailable_threshold,
        }
    }
}
