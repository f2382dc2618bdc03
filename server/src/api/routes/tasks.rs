//! Task span query endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;

use crate::api::extractors::{is_valid_id, is_valid_project_id};
use crate::data::sqlite::repositories::spans;
use crate::data::{SpanRecord, SqliteService};

#[derive(Clone)]
pub struct TasksState {
    pub database: Arc<SqliteService>,
}

#[derive(Serialize)]
pub struct TaskSpansResponse {
    pub spans: Vec<SpanRecord>,
}

pub fn routes(database: Arc<SqliteService>) -> Router {
    Router::new()
        .route("/{task_id}/spans", get(get_spans_for_task))
        .with_state(TasksState { database })
}

/// List all spans correlated with a task, in storage insertion order
pub async fn get_spans_for_task(
    State(state): State<TasksState>,
    Path((project_id, task_id)): Path<(String, String)>,
) -> Response {
    if !is_valid_project_id(&project_id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid project_id"})),
        )
            .into_response();
    }
    if !is_valid_id(&task_id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid task_id"})),
        )
            .into_response();
    }

    match spans::get_spans_for_task(state.database.pool(), &project_id, &task_id).await {
        Ok(spans) => (StatusCode::OK, Json(TaskSpansResponse { spans })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, project_id, task_id, "Failed to fetch spans for task");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to fetch spans"})),
            )
                .into_response()
        }
    }
}
