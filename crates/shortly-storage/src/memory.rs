use async_trait::async_trait;
use dashmap::DashMap;
use shortly_core::{RecordStore, Result, ShortCode};

/// In-memory implementation of [`RecordStore`] using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking.
///
/// The store holds raw bytes and knows nothing about expiry; like every
/// [`RecordStore`], eviction of expired records is the resolver's job.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    storage: DashMap<String, Vec<u8>>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get(&self, key: &ShortCode) -> Result<Option<Vec<u8>>> {
        Ok(self.storage.get(key.as_str()).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &ShortCode, value: Vec<u8>) -> Result<()> {
        self.storage.insert(key.as_str().to_owned(), value);
        Ok(())
    }

    async fn delete(&self, key: &ShortCode) -> Result<bool> {
        Ok(self.storage.remove(key.as_str()).is_some())
    }

    async fn exists(&self, key: &ShortCode) -> Result<bool> {
        Ok(self.storage.contains_key(key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    #[tokio::test]
    async fn set_and_get() {
        let store = InMemoryStore::new();

        store.set(&code("abc123"), b"payload".to_vec()).await.unwrap();

        let value = store.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(value, b"payload");
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let store = InMemoryStore::new();

        assert!(store.get(&code("nothin")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = InMemoryStore::new();

        store.set(&code("abc123"), b"old".to_vec()).await.unwrap();
        store.set(&code("abc123"), b"new".to_vec()).await.unwrap();

        let value = store.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(value, b"new");
    }

    #[tokio::test]
    async fn delete_existing() {
        let store = InMemoryStore::new();

        store.set(&code("abc123"), b"payload".to_vec()).await.unwrap();

        assert!(store.delete(&code("abc123")).await.unwrap());
        assert!(store.get(&code("abc123")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_nonexistent_is_noop() {
        let store = InMemoryStore::new();

        assert!(!store.delete(&code("nothin")).await.unwrap());
    }

    #[tokio::test]
    async fn exists_checks() {
        let store = InMemoryStore::new();

        assert!(!store.exists(&code("abc123")).await.unwrap());

        store.set(&code("abc123"), b"payload".to_vec()).await.unwrap();

        assert!(store.exists(&code("abc123")).await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryStore::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let key = ShortCode::new_unchecked(format!("key{:03}", i));
                store.set(&key, format!("value-{}", i).into_bytes()).await.unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let key = ShortCode::new_unchecked(format!("key{:03}", i));
            let value = store.get(&key).await.unwrap().unwrap();
            assert_eq!(value, format!("value-{}", i).into_bytes());
        }
    }
}
