use std::collections::HashMap;
use std::sync::Weak;
use parking_lot::Mutex;
use crate::tracker::structs::info_hash::InfoHash;

/// One async mutex per info hash currently being fetched.
///
/// Entries are weak so finished lookups do not pin memory.
#[derive(Default)]
pub struct HashLocks {
    pub(crate) locks: Mutex<HashMap<InfoHash, Weak<tokio::sync::Mutex<()>>>>,
}
