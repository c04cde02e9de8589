//! Suggestion gateway.
//!
//! Every operation follows the same shape: return a placeholder when the
//! snapshot is empty, otherwise build a prompt, call the provider, and
//! reshape the reply. Provider errors never escape as errors of their own;
//! [`SuggestionGateway::absorb`] turns each into a [`ProviderFailure`] that
//! endpoints embed in an otherwise normal response.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use studydesk_models::{Course, Feedback, Task};

use crate::error::SuggestError;
use crate::prompts;
use crate::provider::TextGenerator;

/// Placeholder returned when there are no tasks.
pub const NO_TASKS: &str = "Add some tasks first!";
/// Placeholder returned when there are no courses.
pub const NO_COURSES: &str = "Add some courses first!";
/// Placeholder returned when there is no feedback.
pub const NO_FEEDBACK: &str = "No feedback available yet.";

/// A provider error, reduced to a readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFailure(pub String);

impl ProviderFailure {
    /// The description prefixed for inline display, `"Error: <details>"`.
    pub fn inline(&self) -> String {
        format!("Error: {}", self.0)
    }
}

impl fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a suggestion call.
pub type Generated<T> = std::result::Result<T, ProviderFailure>;

/// Builds prompts from collection snapshots and forwards them to a provider.
#[derive(Clone)]
pub struct SuggestionGateway {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl SuggestionGateway {
    /// Creates a gateway that calls `generator` with `model`.
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    /// Model identifier sent with every call.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Three productivity tips derived from the task texts, as one string.
    pub async fn suggest_tasks(&self, tasks: &[Task]) -> Generated<String> {
        if tasks.is_empty() {
            return Ok(NO_TASKS.to_string());
        }
        self.ask(&prompts::task_prompt(tasks)).await
    }

    /// One new course suggestion, split into clean bullet lines.
    pub async fn suggest_course(&self, courses: &[Course]) -> Generated<Vec<String>> {
        if courses.is_empty() {
            return Ok(vec![NO_COURSES.to_string()]);
        }
        let reply = self.ask(&prompts::course_prompt(courses)).await?;
        Ok(prompts::bullet_lines(&reply))
    }

    /// A 3-4 sentence summary of all feedback.
    pub async fn summarize_feedback(&self, entries: &[Feedback]) -> Generated<String> {
        if entries.is_empty() {
            return Ok(NO_FEEDBACK.to_string());
        }
        self.ask(&prompts::feedback_prompt(entries)).await
    }

    /// Calls the provider and returns the trimmed reply.
    async fn ask(&self, prompt: &str) -> Generated<String> {
        debug!(model = %self.model, prompt_chars = prompt.len(), "calling provider");
        self.generator
            .generate(&self.model, prompt)
            .await
            .map(|text| text.trim().to_string())
            .map_err(Self::absorb)
    }

    /// The single conversion point from provider errors to embedded failures.
    fn absorb(err: SuggestError) -> ProviderFailure {
        warn!(error = %err, "provider call failed");
        ProviderFailure(err.to_string())
    }
}
