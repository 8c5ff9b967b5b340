use log::{debug, warn};
use crate::cache::structs::cache_store::CacheStore;
use crate::common::common::current_time_precise;
use crate::resilience::enums::failure_kind::FailureKind;
use crate::resilience::structs::circuit_breaker::CircuitBreaker;
use crate::resilience::structs::circuit_policy::CircuitPolicy;

const DISABLED_FIELD: &str = "disabled";
const COUNTER_FIELDS: [&str; 2] = ["timeouts", "503s"];

impl CircuitBreaker {
    pub fn new(key: &str, policy: CircuitPolicy, store: CacheStore) -> CircuitBreaker {
        CircuitBreaker {
            key: key.to_string(),
            policy,
            store,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn policy(&self) -> &CircuitPolicy {
        &self.policy
    }

    /// Open while a `disabled` marker exists and its deadline has not passed.
    ///
    /// A stale marker is cleared together with the counters.
    pub async fn is_open(&self) -> bool {
        let Some(raw) = self.store.hash_get(&self.key, DISABLED_FIELD).await else {
            return false;
        };
        let disabled_until = raw.parse::<f64>().unwrap_or(0.0);
        if current_time_precise() < disabled_until {
            return true;
        }
        debug!("[CIRCUIT] {} cooldown elapsed, closing", self.key);
        self.store.hash_del(&self.key, &[DISABLED_FIELD, COUNTER_FIELDS[0], COUNTER_FIELDS[1]]).await;
        false
    }

    /// Counts one failure and opens the breaker once the threshold for
    /// `kind` is reached. Returns whether this call opened it.
    pub async fn record_failure(&self, kind: FailureKind) -> bool {
        let threshold = self.policy.threshold(kind);
        if threshold == 0 {
            return false;
        }
        let Some(count) = self.store.hash_incr(&self.key, kind.field(), self.policy.counter_ttl).await else {
            return false;
        };
        if (count as u64) < threshold {
            debug!("[CIRCUIT] {} {} {}/{}", self.key, kind.field(), count, threshold);
            return false;
        }
        self.open().await;
        warn!(
            "[CIRCUIT] {} opened after {} consecutive {}, disabled for {}s",
            self.key, count, kind.field(), self.policy.cooldown
        );
        true
    }

    /// Any success closes the counting window.
    pub async fn record_success(&self) {
        self.store.hash_del(&self.key, &COUNTER_FIELDS).await;
    }

    pub async fn failure_count(&self, kind: FailureKind) -> u64 {
        self.store
            .hash_get(&self.key, kind.field())
            .await
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(0)
    }

    /// Opens the breaker for one cooldown and resets the counters.
    pub async fn open(&self) {
        let disabled_until = current_time_precise() + self.policy.cooldown as f64;
        self.store
            .hash_set(&self.key, &[(DISABLED_FIELD, format!("{disabled_until:.3}"))], self.policy.cooldown)
            .await;
        self.store.hash_del(&self.key, &COUNTER_FIELDS).await;
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }
}
