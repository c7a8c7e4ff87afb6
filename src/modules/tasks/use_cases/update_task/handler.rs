use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::tasks::core::resolve::{Resolution, UpdateRules, resolve_update};
use crate::modules::tasks::use_cases::update_task::command::UpdateTask;
use std::sync::Arc;

pub struct UpdateTaskHandler {
    store: Arc<TaskStore>,
    rules: UpdateRules,
}

impl UpdateTaskHandler {
    pub fn new(store: Arc<TaskStore>, rules: UpdateRules) -> Self {
        Self { store, rules }
    }

    /// Resolve the update against the stored record and write the result back,
    /// all inside one store transaction. Conflicts and misses leave the store untouched.
    pub async fn handle(&self, command: UpdateTask) -> Resolution {
        let UpdateTask {
            task_id,
            payload,
            requested_at,
        } = command;
        let rules = self.rules;

        let resolution = self
            .store
            .transact(|tasks| {
                let resolution =
                    resolve_update(tasks.find(&task_id), &task_id, payload, requested_at, rules);
                if let Resolution::Created(task) | Resolution::Updated(task) = &resolution {
                    tasks.upsert(task.clone());
                }
                resolution
            })
            .await;

        match &resolution {
            Resolution::Created(_) => tracing::info!(%task_id, "task not found, created"),
            Resolution::Updated(_) => tracing::info!(%task_id, "updated task"),
            Resolution::Conflict(reason) => {
                tracing::warn!(%task_id, %reason, "rejected stale task update")
            }
            Resolution::NotFound => tracing::info!(%task_id, "task not found for update"),
        }
        resolution
    }
}
