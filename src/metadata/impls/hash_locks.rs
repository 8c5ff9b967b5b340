use std::sync::Arc;
use crate::metadata::structs::hash_locks::HashLocks;
use crate::tracker::structs::info_hash::InfoHash;

const PRUNE_THRESHOLD: usize = 1024;

impl HashLocks {
    pub fn new() -> HashLocks {
        HashLocks::default()
    }

    pub fn lock_for(&self, info_hash: &InfoHash) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock();
        if let Some(lock) = locks.get(info_hash).and_then(|weak| weak.upgrade()) {
            return lock;
        }
        if locks.len() >= PRUNE_THRESHOLD {
            locks.retain(|_, weak| weak.strong_count() > 0);
        }
        let lock = Arc::new(tokio::sync::Mutex::new(()));
        locks.insert(*info_hash, Arc::downgrade(&lock));
        lock
    }

    /// Number of hashes with a live lock.
    pub fn active(&self) -> usize {
        self.locks.lock().values().filter(|weak| weak.strong_count() > 0).count()
    }
}
