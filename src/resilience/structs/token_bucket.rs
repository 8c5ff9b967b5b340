use parking_lot::Mutex;
use crate::resilience::structs::token_bucket_state::TokenBucketState;

#[derive(Debug)]
pub struct TokenBucket {
    pub(crate) capacity: f64,
    pub(crate) refill_per_second: f64,
    pub(crate) state: Mutex<TokenBucketState>,
}
