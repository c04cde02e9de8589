//! Feedback handlers.

use axum::{extract::State, Json};

use studydesk_models::{Feedback, FeedbackId};

use crate::state::AppState;
use crate::types::{
    AddFeedbackRequest, DeleteRequest, FeedbackResponse, StatusResponse, SubmitFeedbackRequest,
};

/// GET /get_feedback - List all feedback.
pub async fn list_feedback(State(state): State<AppState>) -> Json<Vec<Feedback>> {
    Json(state.feedback.list().await)
}

/// POST /submit_feedback - Submit a titled review.
///
/// Responds with the whole feedback list, whether or not the review was stored.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(req): Json<SubmitFeedbackRequest>,
) -> Json<Vec<Feedback>> {
    let entries = state
        .feedback
        .create_full(req.title.as_deref(), req.comment.as_deref())
        .await;
    Json(entries)
}

/// POST /add_feedback - Add a free-text note.
pub async fn add_feedback(
    State(state): State<AppState>,
    Json(req): Json<AddFeedbackRequest>,
) -> Json<FeedbackResponse> {
    let note = state
        .feedback
        .create_text_only(req.text.unwrap_or_default())
        .await;
    Json(FeedbackResponse::from(note))
}

/// POST /delete_feedback - Delete a feedback entry.
pub async fn delete_feedback(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Json<StatusResponse> {
    if let Some(id) = req.id() {
        state.feedback.delete(&FeedbackId::from(id)).await;
    }
    Json(StatusResponse::success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::make_test_state;

    #[tokio::test]
    async fn test_submit_feedback_returns_list() {
        let state = make_test_state();
        let req = SubmitFeedbackRequest {
            title: Some("A".to_string()),
            comment: Some("B".to_string()),
        };
        let response = submit_feedback(State(state.clone()), Json(req)).await;
        assert_eq!(response.len(), 1);

        let req = SubmitFeedbackRequest {
            title: Some("A".to_string()),
            comment: None,
        };
        let response = submit_feedback(State(state), Json(req)).await;
        assert_eq!(response.len(), 1);
    }

    #[tokio::test]
    async fn test_add_feedback_returns_entry() {
        let state = make_test_state();
        let req = AddFeedbackRequest {
            text: Some("More examples".to_string()),
        };
        let response = add_feedback(State(state.clone()), Json(req)).await;
        assert_eq!(response.status, "success");
        assert_eq!(list_feedback(State(state)).await.0, vec![response.feedback.clone()]);
    }
}
