use std::collections::HashMap;
use std::sync::RwLock;

use crate::errors::{Result, UtmError};
use crate::storage::KeyValueStore;

/// 进程内存储，不落盘
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .inner
            .read()
            .map_err(|_| UtmError::file_operation("Memory store lock poisoned"))?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, json: &str) -> Result<()> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| UtmError::file_operation("Memory store lock poisoned"))?;
        guard.insert(key.to_string(), json.to_string());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
