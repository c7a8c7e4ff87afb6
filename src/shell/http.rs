use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::tasks::use_cases::create_task::inbound::http as create_http;
use crate::modules::tasks::use_cases::delete_task::inbound::http as delete_http;
use crate::modules::tasks::use_cases::get_task::inbound::http as get_http;
use crate::modules::tasks::use_cases::list_tasks::inbound::http as list_http;
use crate::modules::tasks::use_cases::update_task::inbound::http as update_http;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

pub fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn task_not_found() -> Response {
    message(StatusCode::NOT_FOUND, "Task not found")
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(list_http::handle).post(create_http::handle))
        .route(
            "/tasks/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
