// Task record store.
//
// Purpose
// - Own the process wide task collection and keep the durable snapshot in step with it.
//
// Responsibilities
// - Load the snapshot once at startup; a missing or unreadable snapshot starts an empty store.
// - Keep records in insertion order, keyed by id.
// - Run every mutation as read, decide, write and persist under one write lock,
//   so concurrent mutations are serialized and readers never see a half applied change.
// - Persist after each mutation. A failed write is logged and the in memory state is kept.

use crate::modules::tasks::core::task::Task;
use crate::shared::infrastructure::snapshot_store::{SnapshotError, SnapshotStore};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

/// Mutable view of the collection handed to [`TaskStore::transact`].
pub struct TaskCollection<'a> {
    tasks: &'a mut Vec<Task>,
    dirty: bool,
}

impl TaskCollection<'_> {
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replace the record with the same id in place, or append it.
    pub fn upsert(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task,
            None => self.tasks.push(task),
        }
        self.dirty = true;
    }

    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        self.dirty = true;
        Some(self.tasks.remove(index))
    }
}

pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
    snapshots: Arc<dyn SnapshotStore<Task>>,
}

impl TaskStore {
    pub async fn load(snapshots: Arc<dyn SnapshotStore<Task>>) -> Self {
        let tasks = match snapshots.load().await {
            Ok(tasks) => {
                info!(count = tasks.len(), "loaded task snapshot");
                tasks
            }
            Err(SnapshotError::Missing(location)) => {
                warn!(%location, "no task snapshot found, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "task snapshot unreadable, starting empty");
                Vec::new()
            }
        };
        Self {
            tasks: RwLock::new(tasks),
            snapshots,
        }
    }

    pub async fn get_all(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Task> {
        self.tasks.read().await.iter().find(|t| t.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }

    pub async fn upsert(&self, task: Task) {
        self.transact(|tasks| tasks.upsert(task)).await
    }

    /// Returns whether a record was actually removed.
    pub async fn delete(&self, id: &str) -> bool {
        self.transact(|tasks| tasks.remove(id).is_some()).await
    }

    /// Insert `seed` only when the store holds no records. Returns whether it seeded.
    pub async fn seed_if_empty(&self, seed: Vec<Task>) -> bool {
        self.transact(|tasks| {
            if !tasks.tasks.is_empty() {
                return false;
            }
            for task in seed {
                tasks.upsert(task);
            }
            true
        })
        .await
    }

    /// Run `operation` with exclusive access to the collection and persist afterwards
    /// if it changed anything. The lock is held until the snapshot write has been attempted.
    pub async fn transact<T>(&self, operation: impl FnOnce(&mut TaskCollection<'_>) -> T) -> T {
        let mut guard = self.tasks.write().await;
        let (result, dirty) = {
            let mut collection = TaskCollection {
                tasks: &mut *guard,
                dirty: false,
            };
            let result = operation(&mut collection);
            (result, collection.dirty)
        };
        if dirty {
            self.persist(&guard).await;
        }
        result
    }

    async fn persist(&self, tasks: &[Task]) {
        if let Err(e) = self.snapshots.save(tasks).await {
            error!(error = %e, count = tasks.len(), "failed to persist task snapshot");
        }
    }
}
