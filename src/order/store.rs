//! Saved order persistence

use crate::config::BoardConfig;
use crate::error::PersistenceError;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistent storage for the user's clip order
pub trait OrderStore {
    /// Saved id sequence, or None when nothing (readable) is stored
    fn get(&self) -> Option<Vec<String>>;

    /// Replace the saved id sequence
    fn set(&mut self, ids: &[String]) -> Result<(), PersistenceError>;
}

/// Order kept in memory for the lifetime of the board
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
    ids: Option<Vec<String>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a saved order
    pub fn with_order(ids: Vec<String>) -> Self {
        Self { ids: Some(ids) }
    }
}

impl OrderStore for MemoryOrderStore {
    fn get(&self) -> Option<Vec<String>> {
        self.ids.clone()
    }

    fn set(&mut self, ids: &[String]) -> Result<(), PersistenceError> {
        self.ids = Some(ids.to_vec());
        Ok(())
    }
}

/// Order saved as a JSON array in `<dir>/<storage key>.json`
#[derive(Debug, Clone)]
pub struct FileOrderStore {
    path: PathBuf,
}

impl FileOrderStore {
    /// Store under `dir` using the given storage key
    pub fn new(dir: &Path, key: &str) -> Self {
        Self {
            path: dir.join(format!("{}.json", key)),
        }
    }

    /// Store under `dir` using the configured storage key
    pub fn from_config(dir: &Path, config: &BoardConfig) -> Self {
        Self::new(dir, &config.storage_key)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderStore for FileOrderStore {
    fn get(&self) -> Option<Vec<String>> {
        let text = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&text) {
            Ok(ids) => Some(ids),
            Err(e) => {
                log::warn!("Ignoring unreadable saved order at {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn set(&mut self, ids: &[String]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(ids)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryOrderStore::new();
        assert!(store.get().is_none());

        store.set(&["b".to_string(), "a".to_string()]).unwrap();
        assert_eq!(store.get(), Some(vec!["b".to_string(), "a".to_string()]));
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let config = BoardConfig::default();

        let mut store = FileOrderStore::from_config(dir.path(), &config);
        assert!(store.get().is_none());
        store.set(&["x".to_string()]).unwrap();
        assert!(store.path().ends_with("soundboard-order.json"));

        let reopened = FileOrderStore::from_config(dir.path(), &config);
        assert_eq!(reopened.get(), Some(vec!["x".to_string()]));
    }

    #[test]
    fn test_file_store_ignores_garbage() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path(), "order");
        fs::write(store.path(), "{\"not\":\"a list\"}").unwrap();

        assert!(store.get().is_none());
    }

    #[test]
    fn test_storage_key_selects_file() {
        let dir = TempDir::new().unwrap();
        let config = BoardConfig::default().with_storage_key("party-board");

        let mut party = FileOrderStore::from_config(dir.path(), &config);
        party.set(&["b".to_string(), "a".to_string()]).unwrap();
        assert_eq!(party.path(), dir.path().join("party-board.json"));

        // Boards under another key do not see this order
        let default = FileOrderStore::from_config(dir.path(), &BoardConfig::default());
        assert!(default.get().is_none());
    }
}
