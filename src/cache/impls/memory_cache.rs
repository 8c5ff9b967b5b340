use std::collections::HashMap;
use std::time::Duration;
use async_trait::async_trait;
use tokio::time::Instant;
use crate::cache::enums::memory_value::MemoryValue;
use crate::cache::errors::CacheError;
use crate::cache::structs::memory_cache::MemoryCache;
use crate::cache::traits::cache_backend::CacheBackend;

impl MemoryCache {
    pub fn new() -> MemoryCache {
        MemoryCache::default()
    }

    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.lock().values().filter(|(_, expires)| Self::alive(expires, now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn deadline(ttl: u64) -> Option<Instant> {
        (ttl > 0).then(|| Instant::now() + Duration::from_secs(ttl))
    }

    fn alive(expires: &Option<Instant>, now: Instant) -> bool {
        expires.is_none_or(|deadline| now < deadline)
    }

    /// Drops the entry when it has expired and returns whether it is still live.
    fn purge_expired(entries: &mut HashMap<String, (MemoryValue, Option<Instant>)>, key: &str) -> bool {
        let live = match entries.get(key) {
            None => return false,
            Some((_, expires)) => Self::alive(expires, Instant::now()),
        };
        if !live {
            entries.remove(key);
        }
        live
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.entries.lock();
        if !Self::purge_expired(&mut entries, key) {
            return Ok(None);
        }
        match entries.get(key) {
            Some((MemoryValue::Plain(value), _)) => Ok(Some(value.clone())),
            Some((MemoryValue::Hash(_), _)) => Err(CacheError::OperationError(format!("{key} holds a hash"))),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: u64) -> Result<(), CacheError> {
        self.entries.lock().insert(key.to_string(), (MemoryValue::Plain(value.to_string()), Self::deadline(ttl)));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().remove(key);
        Ok(())
    }

    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.entries.lock();
        if !Self::purge_expired(&mut entries, key) {
            return Ok(None);
        }
        match entries.get(key) {
            Some((MemoryValue::Hash(map), _)) => Ok(map.get(field).cloned()),
            Some((MemoryValue::Plain(_), _)) => Err(CacheError::OperationError(format!("{key} is not a hash"))),
            None => Ok(None),
        }
    }

    async fn hash_set(&self, key: &str, fields: &[(&str, String)], ttl: u64) -> Result<(), CacheError> {
        let mut entries = self.entries.lock();
        Self::purge_expired(&mut entries, key);
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| (MemoryValue::Hash(HashMap::new()), None));
        let MemoryValue::Hash(map) = &mut entry.0 else {
            return Err(CacheError::OperationError(format!("{key} is not a hash")));
        };
        for (field, value) in fields {
            map.insert(field.to_string(), value.clone());
        }
        if ttl > 0 {
            entry.1 = Self::deadline(ttl);
        }
        Ok(())
    }

    async fn hash_incr(&self, key: &str, field: &str, ttl: u64) -> Result<i64, CacheError> {
        let mut entries = self.entries.lock();
        Self::purge_expired(&mut entries, key);
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| (MemoryValue::Hash(HashMap::new()), None));
        let MemoryValue::Hash(map) = &mut entry.0 else {
            return Err(CacheError::OperationError(format!("{key} is not a hash")));
        };
        let current = match map.get(field) {
            Some(value) => value.parse::<i64>()
                .map_err(|e| CacheError::SerializationError(format!("{key}.{field}: {e}")))?,
            None => 0,
        };
        let next = current + 1;
        map.insert(field.to_string(), next.to_string());
        if ttl > 0 {
            entry.1 = Self::deadline(ttl);
        }
        Ok(next)
    }

    async fn hash_del(&self, key: &str, fields: &[&str]) -> Result<(), CacheError> {
        let mut entries = self.entries.lock();
        if !Self::purge_expired(&mut entries, key) {
            return Ok(());
        }
        let emptied = match entries.get_mut(key) {
            Some((MemoryValue::Hash(map), _)) => {
                for field in fields {
                    map.remove(*field);
                }
                map.is_empty()
            }
            _ => false,
        };
        if emptied {
            entries.remove(key);
        }
        Ok(())
    }
}
