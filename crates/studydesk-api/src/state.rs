//! Application state shared across handlers.

use std::sync::Arc;

use studydesk_store::{CourseStore, FeedbackStore, TaskStore};
use studydesk_suggest::SuggestionGateway;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
///
/// Each store is owned here and guarded by its own lock; handlers only reach
/// a collection through its store's methods.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Task store.
    pub tasks: Arc<TaskStore>,
    /// Course store.
    pub courses: Arc<CourseStore>,
    /// Feedback store.
    pub feedback: Arc<FeedbackStore>,
    /// Suggestion gateway.
    pub gateway: SuggestionGateway,
}

impl AppState {
    /// Creates a new AppState with empty stores.
    pub fn new(config: ApiConfig, gateway: SuggestionGateway) -> Self {
        Self {
            config: Arc::new(config),
            tasks: Arc::new(TaskStore::new()),
            courses: Arc::new(CourseStore::new()),
            feedback: Arc::new(FeedbackStore::new()),
            gateway,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared fixtures for handler and router tests.

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use studydesk_suggest::{SuggestError, SuggestionGateway, TextGenerator, DEFAULT_MODEL};

    use super::AppState;
    use crate::config::ApiConfig;

    /// Provider double that replies with a fixed result and counts calls.
    pub struct ScriptedGenerator {
        reply: std::result::Result<String, String>,
        calls: Mutex<usize>,
    }

    impl ScriptedGenerator {
        pub fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: Mutex::new(0),
            })
        }

        pub fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                calls: Mutex::new(0),
            })
        }

        pub fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _model: &str, _prompt: &str) -> studydesk_suggest::Result<String> {
            *self.calls.lock().unwrap() += 1;
            self.reply.clone().map_err(SuggestError::Http)
        }
    }

    pub fn make_state_with(generator: Arc<ScriptedGenerator>) -> AppState {
        AppState::new(
            ApiConfig::default(),
            SuggestionGateway::new(generator, DEFAULT_MODEL),
        )
    }

    pub fn make_test_state() -> AppState {
        make_state_with(ScriptedGenerator::replying("ok"))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::make_test_state;

    #[tokio::test]
    async fn test_app_state_starts_empty() {
        let state = make_test_state();
        assert!(state.tasks.list().await.is_empty());
        assert!(state.courses.list().await.is_empty());
        assert!(state.feedback.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_app_state_clones_share_stores() {
        let state = make_test_state();
        let other = state.clone();
        state.tasks.create("shared").await;
        assert_eq!(other.tasks.list().await.len(), 1);
    }
}
