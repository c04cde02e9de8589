//! Task handlers.

use axum::{extract::State, Json};

use studydesk_models::{Task, TaskId};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{CreateTaskRequest, DeleteRequest, StatusResponse, TaskResponse, UpdateTaskRequest};

/// GET /get_tasks - List all tasks.
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.tasks.list().await)
}

/// POST /add_task - Create a task.
pub async fn add_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Json<TaskResponse> {
    let task = state.tasks.create(req.text.unwrap_or_default()).await;
    Json(TaskResponse::from(task))
}

/// POST /update_task - Update a task's text and/or completion flag.
pub async fn update_task(
    State(state): State<AppState>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>> {
    let id = req
        .id
        .as_deref()
        .map(TaskId::from)
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    let task = state.tasks.update(&id, req.patch()).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// POST /delete_task - Delete a task. Succeeds even if nothing matched.
pub async fn delete_task(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Json<StatusResponse> {
    if let Some(id) = req.id() {
        state.tasks.delete(&TaskId::from(id)).await;
    }
    Json(StatusResponse::success())
}
