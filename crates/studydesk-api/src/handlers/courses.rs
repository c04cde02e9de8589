//! Course handlers.

use axum::{extract::State, Json};

use studydesk_models::{Course, CourseId};

use crate::state::AppState;
use crate::types::{CourseResponse, CreateCourseRequest, DeleteRequest, StatusResponse};

/// GET /get_courses - List all courses.
pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.courses.list().await)
}

/// POST /add_course - Create a course.
pub async fn add_course(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> Json<CourseResponse> {
    let course = state
        .courses
        .create(
            req.title.unwrap_or_default(),
            req.description.unwrap_or_default(),
        )
        .await;
    Json(CourseResponse::from(course))
}

/// POST /delete_course - Delete a course.
pub async fn delete_course(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Json<StatusResponse> {
    if let Some(id) = req.id() {
        state.courses.delete(&CourseId::from(id)).await;
    }
    Json(StatusResponse::success())
}
