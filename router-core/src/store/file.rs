//! File-backed store: one JSON file per key inside a state directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{validate_key, KeyValueStore};
use crate::error::RouterResult;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> RouterResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> RouterResult<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> RouterResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, value)?;
        debug!(path = %path.display(), "Record written");
        Ok(())
    }

    fn remove(&self, key: &str) -> RouterResult<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}
