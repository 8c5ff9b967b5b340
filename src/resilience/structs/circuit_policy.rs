/// A threshold of zero disables counting for that failure class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitPolicy {
    pub timeout_threshold: u64,
    pub unavailable_threshold: u64,
    pub cooldown: u64,
    pub counter_ttl: u64,
}
