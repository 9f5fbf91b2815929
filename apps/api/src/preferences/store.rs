use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::preferences::{PreferenceError, PreferenceStore};

/// Key-value preferences kept as a flat JSON object in one file.
/// A missing file reads as an empty store.
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Sibling temp file, then rename over the target.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(&entries)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!("Saved preference {key}={value} to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryPreferenceStore;

#[cfg(test)]
mod memory {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use crate::preferences::{PreferenceError, PreferenceStore};

    /// In-process store for handler and shell tests.
    #[derive(Default)]
    pub struct MemoryPreferenceStore {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl PreferenceStore for MemoryPreferenceStore {
        async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            Ok(self.entries.lock().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            self.entries
                .lock()
                .await
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::DARK_MODE_KEY;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get(DARK_MODE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_value_survives_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        FilePreferenceStore::new(&path)
            .set(DARK_MODE_KEY, "enabled")
            .await
            .unwrap();

        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(
            reopened.get(DARK_MODE_KEY).await.unwrap().as_deref(),
            Some("enabled")
        );
    }

    #[tokio::test]
    async fn test_set_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));
        store.set("other", "1").await.unwrap();
        store.set(DARK_MODE_KEY, "disabled").await.unwrap();
        assert_eq!(store.get("other").await.unwrap().as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, b"not json").unwrap();
        let store = FilePreferenceStore::new(&path);
        assert!(matches!(
            store.get(DARK_MODE_KEY).await,
            Err(PreferenceError::Parse(_))
        ));
    }
}
