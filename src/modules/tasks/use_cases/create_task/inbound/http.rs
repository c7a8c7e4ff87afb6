use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::tasks::core::patch::TaskPatch;
use crate::modules::tasks::core::timestamp::now_millis;
use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<TaskPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateTask {
        payload,
        requested_at: now_millis(),
    };

    let task = state.create_handler.handle(command).await;
    (StatusCode::CREATED, Json(task)).into_response()
}
