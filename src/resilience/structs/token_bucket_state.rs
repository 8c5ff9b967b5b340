use tokio::time::Instant;

/// `tokens` goes negative while callers are queued for a refill.
#[derive(Debug, Clone, Copy)]
pub struct TokenBucketState {
    pub tokens: f64,
    pub last_refill: Instant,
}
