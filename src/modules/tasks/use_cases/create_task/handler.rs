use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::tasks::core::task::Task;
use crate::modules::tasks::core::timestamp::advance;
use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use std::sync::Arc;
use uuid::Uuid;

pub struct CreateTaskHandler {
    store: Arc<TaskStore>,
}

impl CreateTaskHandler {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    /// Stores a new task. The client id is kept when non-empty, otherwise a UUID v7 is assigned.
    /// An id that is already stored is replaced in place: its `created_at` is kept and
    /// `updated_at` moves forward from the stored value.
    pub async fn handle(&self, command: CreateTask) -> Task {
        let CreateTask {
            payload,
            requested_at,
        } = command;
        let id = payload
            .requested_id()
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::now_v7().to_string());

        let (task, replaced) = self
            .store
            .transact(|tasks| {
                let (task, replaced) = match tasks.find(&id) {
                    Some(existing) => (
                        Task {
                            created_at: existing.created_at,
                            updated_at: advance(existing.updated_at, requested_at),
                            ..Task::create(id, payload, requested_at)
                        },
                        true,
                    ),
                    None => (Task::create(id, payload, requested_at), false),
                };
                tasks.upsert(task.clone());
                (task, replaced)
            })
            .await;

        if replaced {
            tracing::info!(task_id = %task.id, "replaced existing task on create");
        } else {
            tracing::info!(task_id = %task.id, "created task");
        }
        task
    }
}
