use crate::modules::tasks::core::task::Task;
use chrono::DateTime;

const DEMO_TASKS: [(&str, &str, &str, i64); 2] = [
    (
        "d9a7e7de-093b-4c72-9998-d77489456a3b",
        "Task from Server 1",
        "This task was pre-loaded from the server.",
        1_764_410_400_000,
    ),
    (
        "a8c6c4b1-1b2f-4b3a-9c0d-3f7e9b6a1b3a",
        "Task from Server 2",
        "Another task from the server.",
        1_764_414_000_000,
    ),
];

/// Records loaded into an empty store when demo seeding is enabled.
pub fn demo_tasks() -> Vec<Task> {
    DEMO_TASKS
        .iter()
        .filter_map(|(id, title, description, at_ms)| {
            let at = DateTime::from_timestamp_millis(*at_ms)?;
            Some(Task {
                id: (*id).to_string(),
                title: (*title).to_string(),
                description: (*description).to_string(),
                is_completed: false,
                created_at: at,
                updated_at: at,
                image_path: None,
                location: None,
            })
        })
        .collect()
}
