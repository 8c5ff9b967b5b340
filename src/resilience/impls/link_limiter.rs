use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};
use tokio::time::Instant;
use crate::resilience::structs::link_limiter::LinkLimiter;

impl LinkLimiter {
    pub fn new(max_concurrent: usize, min_gap: Duration) -> LinkLimiter {
        LinkLimiter {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            min_gap,
            last_request: Mutex::new(HashMap::new()),
        }
    }

    /// Takes a concurrency slot and waits for the domain's turn.
    ///
    /// Slots for the same domain are handed out `min_gap` apart, so callers
    /// queued together still hit the domain one gap at a time.
    pub async fn acquire(&self, domain: &str) -> Result<OwnedSemaphorePermit, AcquireError> {
        let permit = self.semaphore.clone().acquire_owned().await?;
        let slot = self.reserve_slot(domain);
        tokio::time::sleep_until(slot).await;
        Ok(permit)
    }

    fn reserve_slot(&self, domain: &str) -> Instant {
        let domain = domain.to_lowercase();
        let now = Instant::now();
        let mut last_request = self.last_request.lock();
        let slot = match last_request.get(&domain) {
            Some(previous) => (*previous + self.min_gap).max(now),
            None => now,
        };
        last_request.insert(domain, slot);
        slot
    }

    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }
}
