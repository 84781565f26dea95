//! In-process store, used by tests and by presenters without persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{validate_key, KeyValueStore};
use crate::error::{RouterError, RouterResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> RouterResult<Option<String>> {
        validate_key(key)?;
        let entries = self.entries.read().map_err(|_| RouterError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> RouterResult<()> {
        validate_key(key)?;
        let mut entries = self.entries.write().map_err(|_| RouterError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> RouterResult<()> {
        validate_key(key)?;
        let mut entries = self.entries.write().map_err(|_| RouterError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}
