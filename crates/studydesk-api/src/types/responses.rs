//! Response DTOs for the API.

use serde::Serialize;

use studydesk_models::{Course, Feedback, Task};
use studydesk_suggest::Generated;

/// Status value for successful mutations.
pub const SUCCESS: &str = "success";

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Bare `{"status": "success"}` response.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: SUCCESS.to_string(),
        }
    }
}

/// Task mutation response.
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    pub status: String,
    pub task: Task,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            status: SUCCESS.to_string(),
            task,
        }
    }
}

/// Course creation response.
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub status: String,
    pub course: Course,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            status: SUCCESS.to_string(),
            course,
        }
    }
}

/// Note creation response.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub status: String,
    pub feedback: Feedback,
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            status: SUCCESS.to_string(),
            feedback,
        }
    }
}

/// Task suggestions. Failures are inlined as `"Error: <details>"`.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: String,
}

impl From<Generated<String>> for SuggestionsResponse {
    fn from(outcome: Generated<String>) -> Self {
        let suggestions = match outcome {
            Ok(text) => text,
            Err(failure) => failure.inline(),
        };
        Self { suggestions }
    }
}

/// Course recommendations, or an `error` field on provider failure.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecommendationsResponse {
    Recommendations { recommendations: Vec<String> },
    Failed { error: String },
}

impl From<Generated<Vec<String>>> for RecommendationsResponse {
    fn from(outcome: Generated<Vec<String>>) -> Self {
        match outcome {
            Ok(recommendations) => Self::Recommendations { recommendations },
            Err(failure) => Self::Failed { error: failure.0 },
        }
    }
}

/// Feedback summary, or an `error` field on provider failure.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SummaryResponse {
    Summary { summary: String },
    Failed { error: String },
}

impl From<Generated<String>> for SummaryResponse {
    fn from(outcome: Generated<String>) -> Self {
        match outcome {
            Ok(summary) => Self::Summary { summary },
            Err(failure) => Self::Failed { error: failure.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use studydesk_suggest::ProviderFailure;

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            uptime_seconds: 100,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"uptime_seconds\":100"));
    }

    #[test]
    fn test_suggestions_inline_failure() {
        let resp = SuggestionsResponse::from(Err(ProviderFailure("quota exceeded".into())));
        assert_eq!(
            serde_json::to_value(resp).unwrap(),
            json!({"suggestions": "Error: quota exceeded"})
        );
    }

    #[test]
    fn test_recommendations_shapes() {
        let ok = RecommendationsResponse::from(Ok(vec!["A".to_string()]));
        assert_eq!(
            serde_json::to_value(ok).unwrap(),
            json!({"recommendations": ["A"]})
        );

        let failed = RecommendationsResponse::from(Err(ProviderFailure("boom".into())));
        assert_eq!(serde_json::to_value(failed).unwrap(), json!({"error": "boom"}));
    }

    #[test]
    fn test_summary_shapes() {
        let ok = SummaryResponse::from(Ok("Mostly positive.".to_string()));
        assert_eq!(
            serde_json::to_value(ok).unwrap(),
            json!({"summary": "Mostly positive."})
        );

        let failed = SummaryResponse::from(Err(ProviderFailure("boom".into())));
        assert_eq!(serde_json::to_value(failed).unwrap(), json!({"error": "boom"}));
    }

    #[test]
    fn test_status_response() {
        assert_eq!(
            serde_json::to_value(StatusResponse::success()).unwrap(),
            json!({"status": "success"})
        );
    }
}
