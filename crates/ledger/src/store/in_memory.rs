use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value as JsonValue;

use super::r#trait::{KvStore, StoreError};

/// In-memory key-value store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    collections: RwLock<HashMap<String, JsonValue>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection document, e.g. to simulate a pre-existing store in
    /// tests.
    pub fn seed(&self, collection: &str, value: JsonValue) {
        if let Ok(mut collections) = self.collections.write() {
            collections.insert(collection.to_string(), value);
        }
    }
}

impl KvStore for InMemoryKvStore {
    fn load(&self, collection: &str) -> Result<Option<JsonValue>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(collections.get(collection).cloned())
    }

    fn save(&self, collection: &str, value: &JsonValue) -> Result<(), StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        collections.insert(collection.to_string(), value.clone());
        Ok(())
    }
}
