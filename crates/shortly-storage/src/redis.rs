use async_trait::async_trait;
use redis::AsyncCommands;
use shortly_core::{RecordStore, Result, ShortCode, StoreError};
use tracing::{debug, trace, warn};

/// Default prefix for record keys in Redis.
const DEFAULT_KEY_PREFIX: &str = "sl:link:";

/// Generates the storage key for a short code.
fn storage_key(prefix: &str, code: &ShortCode) -> String {
    format!("{}{}", prefix, code.as_str())
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    let message = format!("{operation}: {err}");
    if message.to_ascii_lowercase().contains("timed out") {
        StoreError::Timeout(message)
    } else {
        StoreError::Operation(message)
    }
}

/// A Redis-backed implementation of [`RecordStore`].
///
/// Records are stored as raw bytes under a configurable key prefix.
/// Plain get/set/delete only: no Redis-side TTL is ever attached, so the
/// resolver stays the single place where expiry is decided.
#[derive(Debug, Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

impl RedisStore {
    /// Creates a new Redis store over an existing connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self {
            conn,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    /// Creates a new Redis store with a custom key prefix.
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Connects to Redis and wraps the connection in a store.
    pub async fn connect(redis_url: &str) -> std::result::Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| StoreError::Unavailable(format!("invalid redis url: {e}")))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::Unavailable(format!("failed to connect to redis: {e}")))?;
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl RecordStore for RedisStore {
    async fn get(&self, key: &ShortCode) -> Result<Option<Vec<u8>>> {
        let storage_key = storage_key(&self.key_prefix, key);
        trace!(code = %key, "fetching record from Redis");

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<Vec<u8>>>(&storage_key).await {
            Ok(Some(value)) => {
                debug!(code = %key, "record found in Redis");
                Ok(Some(value))
            }
            Ok(None) => {
                trace!(code = %key, "record not present in Redis");
                Ok(None)
            }
            Err(e) => {
                warn!(code = %key, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch value from Redis", e))
            }
        }
    }

    async fn set(&self, key: &ShortCode, value: Vec<u8>) -> Result<()> {
        let storage_key = storage_key(&self.key_prefix, key);
        trace!(code = %key, "storing record in Redis");

        let mut conn = self.conn.clone();
        match conn.set::<_, _, ()>(&storage_key, value).await {
            Ok(()) => {
                debug!(code = %key, "stored record in Redis");
                Ok(())
            }
            Err(e) => {
                warn!(code = %key, error = %e, "Redis error on set");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }

    async fn delete(&self, key: &ShortCode) -> Result<bool> {
        let storage_key = storage_key(&self.key_prefix, key);
        trace!(code = %key, "deleting record from Redis");

        let mut conn = self.conn.clone();
        match conn.del::<_, i64>(&storage_key).await {
            Ok(removed) => {
                debug!(code = %key, removed, "deleted record from Redis");
                Ok(removed > 0)
            }
            Err(e) => {
                warn!(code = %key, error = %e, "Redis error on delete");
                Err(map_redis_error("failed to delete value from Redis", e))
            }
        }
    }

    async fn exists(&self, key: &ShortCode) -> Result<bool> {
        let storage_key = storage_key(&self.key_prefix, key);
        trace!(code = %key, "checking record existence in Redis");

        let mut conn = self.conn.clone();
        conn.exists::<_, bool>(&storage_key)
            .await
            .map_err(|e| map_redis_error("failed to check key existence in Redis", e))
    }
}
