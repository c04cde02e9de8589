//! AI suggestion handlers.
//!
//! Each handler snapshots one store, then calls the gateway with the lock
//! already released. Provider failures come back as 200 responses with the
//! error embedded.

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::types::{RecommendationsResponse, SuggestionsResponse, SummaryResponse};

/// GET /generate_suggestions - Productivity tips for the current tasks.
pub async fn generate_suggestions(State(state): State<AppState>) -> Json<SuggestionsResponse> {
    let tasks = state.tasks.list().await;
    Json(state.gateway.suggest_tasks(&tasks).await.into())
}

/// GET /ai/courses - A new course suggestion based on the catalogue.
pub async fn ai_courses(State(state): State<AppState>) -> Json<RecommendationsResponse> {
    let courses = state.courses.list().await;
    Json(state.gateway.suggest_course(&courses).await.into())
}

/// GET /ai/feedback - A short summary of all feedback.
pub async fn ai_feedback(State(state): State<AppState>) -> Json<SummaryResponse> {
    let entries = state.feedback.list().await;
    Json(state.gateway.summarize_feedback(&entries).await.into())
}
