//! Preferences: the single persisted dark-mode flag and the key-value store behind it.
//!
//! Default backend: `FilePreferenceStore` (JSON file on disk).
//! `AppState` holds an `Arc<dyn PreferenceStore>`.

pub mod handlers;
pub mod store;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::shell::Shell;

pub use store::FilePreferenceStore;
#[cfg(test)]
pub use store::MemoryPreferenceStore;

pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt preference file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persistent key-value store. Implement this to move preferences elsewhere
/// without touching the shell or handlers.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// The dark-mode preference, stored as `"enabled"` / `"disabled"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DarkMode {
    pub enabled: bool,
}

impl DarkMode {
    /// Anything other than `"enabled"`, including no value, means disabled.
    pub fn from_stored(value: Option<&str>) -> Self {
        Self {
            enabled: value == Some("enabled"),
        }
    }

    pub fn as_stored(&self) -> &'static str {
        if self.enabled {
            "enabled"
        } else {
            "disabled"
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            enabled: !self.enabled,
        }
    }

    /// Toggle indicator: the sun offers a way out of dark mode, the moon a way in.
    pub fn indicator(&self) -> &'static str {
        if self.enabled {
            "☀️"
        } else {
            "🌙"
        }
    }
}

/// Reads the preference once at startup. A broken store falls back to light mode.
pub async fn load_dark_mode(store: &dyn PreferenceStore) -> DarkMode {
    match store.get(DARK_MODE_KEY).await {
        Ok(value) => DarkMode::from_stored(value.as_deref()),
        Err(e) => {
            warn!("Could not read dark-mode preference, defaulting to disabled: {e}");
            DarkMode::default()
        }
    }
}

/// Flips the preference and persists it. The shell only changes once the store
/// accepted the new value.
pub async fn toggle_dark_mode(
    shell: &mut Shell,
    store: &dyn PreferenceStore,
) -> Result<DarkMode, PreferenceError> {
    let next = shell.dark_mode().toggled();
    store.set(DARK_MODE_KEY, next.as_stored()).await?;
    shell.set_dark_mode(next);
    info!("Dark mode {}", next.as_stored());
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    #[async_trait]
    impl PreferenceStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Err(std::io::Error::other("disk gone").into())
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(std::io::Error::other("disk gone").into())
        }
    }

    #[test]
    fn test_from_stored_values() {
        assert!(DarkMode::from_stored(Some("enabled")).enabled);
        assert!(!DarkMode::from_stored(Some("disabled")).enabled);
        assert!(!DarkMode::from_stored(Some("garbage")).enabled);
        assert!(!DarkMode::from_stored(None).enabled);
    }

    #[test]
    fn test_indicator_follows_state() {
        assert_eq!(DarkMode { enabled: true }.indicator(), "☀️");
        assert_eq!(DarkMode { enabled: false }.indicator(), "🌙");
    }

    #[tokio::test]
    async fn test_load_reads_stored_value() {
        let store = MemoryPreferenceStore::default();
        store.set(DARK_MODE_KEY, "enabled").await.unwrap();
        assert!(load_dark_mode(&store).await.enabled);
    }

    #[tokio::test]
    async fn test_load_falls_back_on_store_error() {
        assert_eq!(load_dark_mode(&FailingStore).await, DarkMode::default());
    }

    #[tokio::test]
    async fn test_toggle_persists_each_flip() {
        let store = MemoryPreferenceStore::default();
        let mut shell = Shell::new(DarkMode::default());

        let on = toggle_dark_mode(&mut shell, &store).await.unwrap();
        assert!(on.enabled);
        assert_eq!(
            store.get(DARK_MODE_KEY).await.unwrap().as_deref(),
            Some("enabled")
        );

        let off = toggle_dark_mode(&mut shell, &store).await.unwrap();
        assert!(!off.enabled);
        assert_eq!(
            store.get(DARK_MODE_KEY).await.unwrap().as_deref(),
            Some("disabled")
        );
        assert_eq!(shell.dark_mode(), off);
    }

    #[tokio::test]
    async fn test_failed_toggle_leaves_shell_unchanged() {
        let mut shell = Shell::new(DarkMode { enabled: true });
        assert!(toggle_dark_mode(&mut shell, &FailingStore).await.is_err());
        assert!(shell.dark_mode().enabled);
    }
}
