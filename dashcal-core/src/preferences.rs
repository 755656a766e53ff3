//! Persisted layout preferences.
//!
//! The only persisted UI state is whether the sidebar is collapsed. It is
//! read once when the layout starts and written whenever it changes, through
//! a [`KeyValueStore`] supplied by the caller.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{DashCalError, DashCalResult};

/// Store key for the sidebar flag.
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebar-collapsed";

/// String key-value storage for preferences.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> DashCalResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> DashCalResult<()>;
}

/// In-memory store, for tests and sessions that should not persist.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DashCalResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DashCalResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> DashCalResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            DashCalError::Store(format!("Could not parse {}: {e}", self.path.display()))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> DashCalResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> DashCalResult<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&values)
            .map_err(|e| DashCalError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Layout shell state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutState {
    sidebar_collapsed: bool,
}

impl LayoutState {
    /// Read the persisted flag. A missing or unreadable value means expanded.
    pub fn load(store: &impl KeyValueStore) -> DashCalResult<Self> {
        let sidebar_collapsed = match store.get(SIDEBAR_COLLAPSED_KEY)?.as_deref() {
            Some("true") => true,
            Some("false") | None => false,
            Some(other) => {
                warn!(value = other, "ignoring unrecognized sidebar preference");
                false
            }
        };
        Ok(LayoutState { sidebar_collapsed })
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Update the flag, persisting it if it changed.
    pub fn set_sidebar_collapsed(
        &mut self,
        store: &mut impl KeyValueStore,
        collapsed: bool,
    ) -> DashCalResult<()> {
        if self.sidebar_collapsed == collapsed {
            return Ok(());
        }
        store.set(SIDEBAR_COLLAPSED_KEY, if collapsed { "true" } else { "false" })?;
        self.sidebar_collapsed = collapsed;
        Ok(())
    }

    pub fn toggle_sidebar(&mut self, store: &mut impl KeyValueStore) -> DashCalResult<bool> {
        self.set_sidebar_collapsed(store, !self.sidebar_collapsed)?;
        Ok(self.sidebar_collapsed)
    }
}
