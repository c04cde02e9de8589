//! HTTP API for StudyDesk.
//!
//! This crate exposes the in-memory stores and the suggestion gateway over
//! a small JSON API:
//! - Task CRUD (list, add, update, delete)
//! - Course CRUD (list, add, delete)
//! - Feedback (list, submit review, add note, delete)
//! - AI suggestions for tasks, courses, and feedback
//! - A static home page
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use studydesk_api::{serve, ApiConfig, AppState};
//! use studydesk_suggest::{GeminiClient, SuggestConfig, SuggestionGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let suggest = SuggestConfig::from_env();
//!     let gateway = SuggestionGateway::new(Arc::new(GeminiClient::new(&suggest)), suggest.model);
//!     let config = ApiConfig::default();
//!
//!     serve(config.clone(), AppState::new(config, gateway)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
