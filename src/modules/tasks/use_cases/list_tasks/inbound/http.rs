use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let tasks = state.store.get_all().await;
    tracing::debug!(count = tasks.len(), "returning tasks");
    Json(tasks)
}
