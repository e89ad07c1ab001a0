//! Flat key-value blob storage.
//!
//! Values are opaque strings; callers that need structure encode it
//! themselves (usually as JSON). Every write is flushed to disk straight away.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

pub struct LocalStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("could not read store {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("store {} is not a JSON object of strings", path.display()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), anyhow::Error> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    pub fn remove(&mut self, key: &str) -> Result<Option<String>, anyhow::Error> {
        let removed = self.entries.remove(key);
        self.flush()?;
        Ok(removed)
    }

    fn flush(&self) -> Result<(), anyhow::Error> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, content).with_context(|| format!("could not write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_in_memory() -> Result<(), anyhow::Error> {
        let mut store = LocalStore::in_memory();
        assert_eq!(None, store.get("foo"));

        store.set("foo", "bar".to_string())?;
        assert_eq!(Some("bar"), store.get("foo"));

        assert_eq!(Some("bar".to_string()), store.remove("foo")?);
        assert_eq!(None, store.get("foo"));
        Ok(())
    }

    #[test]
    fn test_persists_between_opens() -> Result<(), anyhow::Error> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("store.json");

        let mut store = LocalStore::open(&path)?;
        store.set("incidentViewPreference", "list".to_string())?;
        store.set("other", "value".to_string())?;
        store.remove("other")?;

        let store = LocalStore::open(&path)?;
        assert_eq!(Some("list"), store.get("incidentViewPreference"));
        assert_eq!(None, store.get("other"));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_empty() -> Result<(), anyhow::Error> {
        let dir = tempdir()?;
        let store = LocalStore::open(dir.path().join("missing.json"))?;

        assert_eq!(None, store.get("anything"));
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<(), anyhow::Error> {
        let dir = tempdir()?;
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2, 3]")?;

        assert!(LocalStore::open(&path).is_err());
        Ok(())
    }
}
