// Command data type for creating a task.
//
// Purpose
// - Express a client's intent to store a new task, independent of the transport.
//
// Responsibilities
// - Carry the decoded payload and the server clock reading taken when the request arrived.

use crate::modules::tasks::core::patch::TaskPatch;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTask {
    pub payload: TaskPatch,
    pub requested_at: DateTime<Utc>,
}
