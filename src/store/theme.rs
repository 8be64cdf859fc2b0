use super::persist::KeyValueStorage;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

/// Storage key for the persisted theme preference
pub const THEME_STORAGE_KEY: &str = "theme-storage";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ThemePrefs {
    is_dark: bool,
}

/// Theme preference container, persisted across restarts.
pub struct ThemeStore {
    is_dark: AtomicBool,
    storage: Arc<KeyValueStorage>,
}

impl ThemeStore {
    pub fn new(storage: Arc<KeyValueStorage>) -> Self {
        let prefs: ThemePrefs = storage.load(THEME_STORAGE_KEY).unwrap_or_default();

        Self {
            is_dark: AtomicBool::new(prefs.is_dark),
            storage,
        }
    }

    fn persist(&self) {
        let prefs = ThemePrefs {
            is_dark: self.is_dark(),
        };
        if let Err(e) = self.storage.save(THEME_STORAGE_KEY, &prefs) {
            warn!("Failed to persist theme preference: {:#}", e);
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark.load(Ordering::SeqCst)
    }

    pub fn set_theme(&self, is_dark: bool) {
        self.is_dark.store(is_dark, Ordering::SeqCst);
        self.persist();
    }

    pub fn toggle_theme(&self) {
        self.is_dark.fetch_xor(true, Ordering::SeqCst);
        self.persist();
    }
}
