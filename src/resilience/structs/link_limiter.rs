use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::sync::Semaphore;
use tokio::time::Instant;

#[derive(Debug)]
pub struct LinkLimiter {
    pub(crate) semaphore: Arc<Semaphore>,
    pub(crate) min_gap: Duration,
    pub(crate) last_request: Mutex<HashMap<String, Instant>>,
}
