use crate::modules::tasks::core::patch::TaskPatch;
use chrono::{DateTime, Utc};

/// Intent to update (or upsert) the task with `task_id`.
/// `requested_at` is the server clock reading, never the client's `updatedAt`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTask {
    pub task_id: String,
    pub payload: TaskPatch,
    pub requested_at: DateTime<Utc>,
}
