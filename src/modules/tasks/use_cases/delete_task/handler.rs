use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

pub struct DeleteTaskHandler {
    store: Arc<TaskStore>,
}

impl DeleteTaskHandler {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, task_id: &str) -> DeleteOutcome {
        if self.store.delete(task_id).await {
            tracing::info!(%task_id, "deleted task");
            DeleteOutcome::Deleted
        } else {
            tracing::info!(%task_id, "task not found for deletion");
            DeleteOutcome::NotFound
        }
    }
}
