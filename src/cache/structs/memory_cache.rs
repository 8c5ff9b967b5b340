use std::collections::HashMap;
use parking_lot::Mutex;
use tokio::time::Instant;
use crate::cache::enums::memory_value::MemoryValue;

/// In-process cache living for exactly one inbound request.
///
/// Expiry is measured with the tokio clock.
#[derive(Debug, Default)]
pub struct MemoryCache {
    pub(crate) entries: Mutex<HashMap<String, (MemoryValue, Option<Instant>)>>,
}
