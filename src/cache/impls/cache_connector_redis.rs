use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;
use async_trait::async_trait;
use log::debug;
use redis::AsyncCommands;

impl CacheConnectorRedis {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        Ok(Self {
            connection,
            prefix: prefix.to_string(),
        })
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRedis {
    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(self.prefixed(key))
            .await
            .map_err(CacheError::RedisError)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: u64) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        let key = self.prefixed(key);
        if ttl > 0 {
            conn.set_ex::<_, _, ()>(&key, value, ttl)
                .await
                .map_err(CacheError::RedisError)?;
        } else {
            conn.set::<_, _, ()>(&key, value)
                .await
                .map_err(CacheError::RedisError)?;
        }
        debug!("[Redis] Set {} ttl={}", key, ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        conn.del::<_, ()>(self.prefixed(key))
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }

    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.hget(self.prefixed(key), field)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(value)
    }

    async fn hash_set(&self, key: &str, fields: &[(&str, String)], ttl: u64) -> Result<(), CacheError> {
        if fields.is_empty() {
            return Ok(());
        }
        let mut conn = self.connection.clone();
        let key = self.prefixed(key);
        let mut pipe = redis::pipe();
        pipe.hset_multiple(&key, fields);
        if ttl > 0 {
            pipe.expire(&key, ttl as i64);
        }
        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Hash set {} fields={} ttl={}", key, fields.len(), ttl);
        Ok(())
    }

    async fn hash_incr(&self, key: &str, field: &str, ttl: u64) -> Result<i64, CacheError> {
        let mut conn = self.connection.clone();
        let key = self.prefixed(key);
        let value: i64 = conn.hincr(&key, field, 1i64)
            .await
            .map_err(CacheError::RedisError)?;
        if ttl > 0 {
            conn.expire::<_, ()>(&key, ttl as i64)
                .await
                .map_err(CacheError::RedisError)?;
        }
        Ok(value)
    }

    async fn hash_del(&self, key: &str, fields: &[&str]) -> Result<(), CacheError> {
        if fields.is_empty() {
            return Ok(());
        }
        let mut conn = self.connection.clone();
        conn.hdel::<_, _, ()>(self.prefixed(key), fields)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }
}
