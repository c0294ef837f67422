use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::storage::{Category, ObjectStore, StoreError};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStorage {
    objects: RwLock<HashMap<(Category, String), String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait::async_trait]
impl ObjectStore for MemoryStorage {
    async fn write(&self, content: &str, key: &str, category: Category) -> Result<(), StoreError> {
        let mut objects = self.objects.write().await;
        objects.insert((category, key.to_string()), content.to_string());
        Ok(())
    }

    async fn read(&self, key: &str, category: Category) -> Result<Option<String>, StoreError> {
        let objects = self.objects.read().await;
        Ok(objects
            .get(&(category, key.to_string()))
            .filter(|content| !content.is_empty())
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_per_category() {
        let storage = MemoryStorage::new();
        storage.write("{\"a\":1}", "k", Category::Component).await.unwrap();
        storage.write("{\"b\":2}", "k", Category::Project).await.unwrap();

        assert_eq!(storage.object_count().await, 2);
        assert_eq!(
            storage.read("k", Category::Component).await.unwrap().as_deref(),
            Some("{\"a\":1}")
        );
        assert_eq!(
            storage.read("k", Category::Project).await.unwrap().as_deref(),
            Some("{\"b\":2}")
        );
        assert_eq!(storage.read("other", Category::Project).await.unwrap(), None);
    }
}
