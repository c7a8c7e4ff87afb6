use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::modules::tasks::use_cases::delete_task::handler::DeleteOutcome;
use crate::shell::http::{message, task_not_found};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.delete_handler.handle(&id).await {
        DeleteOutcome::Deleted => message(StatusCode::OK, "Task deleted successfully"),
        DeleteOutcome::NotFound => task_not_found(),
    }
}
