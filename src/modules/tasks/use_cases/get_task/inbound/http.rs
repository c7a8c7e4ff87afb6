use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::shell::http::task_not_found;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.find_by_id(&id).await {
        Some(task) => Json(task).into_response(),
        None => task_not_found(),
    }
}
