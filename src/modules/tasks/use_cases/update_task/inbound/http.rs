use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::tasks::core::patch::TaskPatch;
use crate::modules::tasks::core::resolve::Resolution;
use crate::modules::tasks::core::timestamp::now_millis;
use crate::modules::tasks::use_cases::update_task::command::UpdateTask;
use crate::shell::http::{message, task_not_found};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TaskPatch>, JsonRejection>,
) -> Response {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateTask {
        task_id: id,
        payload,
        requested_at: now_millis(),
    };

    match state.update_handler.handle(command).await {
        Resolution::Created(task) => (StatusCode::CREATED, Json(task)).into_response(),
        Resolution::Updated(task) => Json(task).into_response(),
        Resolution::Conflict(reason) => {
            message(StatusCode::CONFLICT, format!("Conflict: {reason}"))
        }
        Resolution::NotFound => task_not_found(),
    }
}
