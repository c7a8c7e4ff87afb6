// In memory implementation of the SnapshotStore port.
//
// Purpose
// - Support store and handler tests and local development without touching the disk.
//
// Responsibilities
// - Keep the last saved snapshot as serialized JSON so loads go through the same decoding as the file adapter.
// - Simulate an unavailable backend with toggle_offline.

use crate::shared::infrastructure::snapshot_store::{SnapshotError, SnapshotStore};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySnapshotStore {
    raw: RwLock<Option<String>>,
    is_offline: bool,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RwLock::new(Some(raw.into())),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn raw(&self) -> Option<String> {
        self.raw.read().await.clone()
    }
}

#[async_trait::async_trait]
impl<Record> SnapshotStore<Record> for InMemorySnapshotStore
where
    Record: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<Record>, SnapshotError> {
        if self.is_offline {
            return Err(SnapshotError::Unavailable("Snapshot store offline".into()));
        }
        let guard = self.raw.read().await;
        match guard.as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Err(SnapshotError::Missing("memory".into())),
        }
    }

    async fn save(&self, records: &[Record]) -> Result<(), SnapshotError> {
        if self.is_offline {
            return Err(SnapshotError::Unavailable("Snapshot store offline".into()));
        }
        let raw = serde_json::to_string_pretty(records)?;
        *self.raw.write().await = Some(raw);
        Ok(())
    }
}
