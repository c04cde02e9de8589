//! Request DTOs for the API.
//!
//! Every field is optional; handlers apply the defaults. Unknown fields are
//! ignored.

use serde::Deserialize;
use serde_json::Value;

use studydesk_models::TaskPatch;

/// Create task request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskRequest {
    /// Task text, empty when absent.
    pub text: Option<String>,
}

/// Update task request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    /// ID of the task to update.
    pub id: Option<String>,
    /// Replacement text.
    pub text: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// The fields to change.
    pub fn patch(&self) -> TaskPatch {
        TaskPatch {
            text: self.text.clone(),
            completed: self.completed,
        }
    }
}

/// Delete request, shared by all collections.
///
/// `id` accepts any JSON value so a malformed id still reaches the handler;
/// only strings can match a stored record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteRequest {
    /// ID of the record to delete.
    pub id: Option<Value>,
}

impl DeleteRequest {
    /// The id, if it was given as a string.
    pub fn id(&self) -> Option<&str> {
        self.id.as_ref().and_then(Value::as_str)
    }
}

/// Create course request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Submit review request. Both fields must be non-empty for anything to be stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub title: Option<String>,
    pub comment: Option<String>,
}

/// Add note request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddFeedbackRequest {
    pub text: Option<String>,
}
