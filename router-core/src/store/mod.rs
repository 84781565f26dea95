//! Key-value store abstraction for persisted records
//!
//! The core only needs three operations on string-keyed JSON records, so any
//! backing (in-memory, files on disk, a browser's local storage) can be
//! plugged in behind [`KeyValueStore`].

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{RouterError, RouterResult};

/// String-keyed store of serialized records
pub trait KeyValueStore {
    /// Raw value for `key`, `None` if absent
    fn get(&self, key: &str) -> RouterResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> RouterResult<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> RouterResult<()>;
}

/// Decode a JSON record
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> RouterResult<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and store a JSON record
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> RouterResult<()> {
    let raw = serde_json::to_string_pretty(value)?;
    store.set(key, &raw)
}

/// Keys are restricted so they double as file names
pub(crate) fn validate_key(key: &str) -> RouterResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(RouterError::invalid_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("router_history").is_ok());
        assert!(validate_key("a-1").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc").is_err());
        assert!(validate_key("Upper").is_err());
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        let mut record = BTreeMap::new();
        record.insert("k".to_string(), vec![1u32, 2]);
        save_json(&store, "numbers", &record).unwrap();

        let back: Option<BTreeMap<String, Vec<u32>>> = load_json(&store, "numbers").unwrap();
        assert_eq!(back, Some(record));

        let missing: Option<Vec<u32>> = load_json(&store, "absent").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_load_json_reports_corruption() {
        let store = MemoryStore::new();
        store.set("numbers", "{not json").unwrap();
        let result: RouterResult<Option<Vec<u32>>> = load_json(&store, "numbers");
        assert!(matches!(result, Err(RouterError::Json(_))));
    }
}
