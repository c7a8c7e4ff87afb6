// Durable snapshot port.
//
// Purpose
// - Persist and restore the complete record collection as a single snapshot.
//
// Responsibilities
// - Load returns every record in stored order, or an error when the snapshot is absent or unreadable.
// - Save replaces the previous snapshot in full. There is no incremental log.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot not found at {0}")]
    Missing(String),

    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("snapshot storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SnapshotStore<Record>: Send + Sync
where
    Record: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<Record>, SnapshotError>;
    async fn save(&self, records: &[Record]) -> Result<(), SnapshotError>;
}

pub mod in_memory;
pub mod json_file;
