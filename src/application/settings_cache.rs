//! Read-through cache over the key-value settings store.
//!
//! Settings are read on almost every render, so the flattened map is kept in
//! memory and reloaded only after a write invalidates it.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::repos::{RepoError, SettingsRepo};

pub type SettingsMap = Arc<HashMap<String, String>>;

pub struct SettingsCache {
    repo: Arc<dyn SettingsRepo>,
    snapshot: RwLock<Option<SettingsMap>>,
}

impl SettingsCache {
    pub fn new(repo: Arc<dyn SettingsRepo>) -> Self {
        Self {
            repo,
            snapshot: RwLock::new(None),
        }
    }

    /// Current settings map, loading from storage on first use.
    pub async fn get(&self) -> Result<SettingsMap, RepoError> {
        if let Some(map) = self.snapshot.read().await.as_ref() {
            return Ok(Arc::clone(map));
        }

        let mut guard = self.snapshot.write().await;
        // Another writer may have filled the slot while we waited.
        if let Some(map) = guard.as_ref() {
            return Ok(Arc::clone(map));
        }

        let entries = self.repo.load_all().await?;
        let map: SettingsMap = Arc::new(entries.into_iter().collect());
        *guard = Some(Arc::clone(&map));
        Ok(map)
    }

    /// Persist entries and drop the snapshot so the next read reloads.
    pub async fn save(&self, entries: &[(String, String)]) -> Result<(), RepoError> {
        self.repo.upsert_many(entries).await?;
        *self.snapshot.write().await = None;
        Ok(())
    }

    pub async fn invalidate(&self) {
        *self.snapshot.write().await = None;
    }
}
