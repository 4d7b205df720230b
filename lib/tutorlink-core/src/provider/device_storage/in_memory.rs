use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{DeviceStorage, StorageError};

#[derive(Debug, Default)]
pub struct InMemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DeviceStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_and_clear() {
        let storage = InMemoryStorage::new();

        storage.set("token", "abc").await.unwrap();
        assert_eq!(storage.get("token").await.unwrap().as_deref(), Some("abc"));

        storage.remove("token").await.unwrap();
        assert_eq!(storage.get("token").await.unwrap(), None);

        storage.set("user", "{}").await.unwrap();
        storage.clear().await.unwrap();
        assert_eq!(storage.get("user").await.unwrap(), None);
    }
}
