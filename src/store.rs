use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Injectable listing cache handed to the fetch cycle at construction.
/// Scoped to the application session; there is no global instance.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn put(&self, key: &str, payload: &str) -> Result<()>;
}

/// In-memory store, dropped with the session.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, payload: &str) -> Result<()> {
        self.entries.lock().unwrap().insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
