//! Generative-text suggestions for StudyDesk.
//!
//! This crate turns a snapshot of one collection into a prompt, forwards it
//! to a text-generation provider, and reshapes the reply for its endpoint.
//!
//! # Core Types
//!
//! - [`TextGenerator`]: provider seam, one async call per prompt
//! - [`GeminiClient`]: production provider backed by the Gemini REST API
//! - [`SuggestionGateway`]: the three suggestion operations
//! - [`ProviderFailure`]: what a caught provider error becomes
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use studydesk_suggest::{GeminiClient, SuggestConfig, SuggestionGateway};
//!
//! let config = SuggestConfig::from_env();
//! let gateway = SuggestionGateway::new(Arc::new(GeminiClient::new(&config)), config.model);
//! let tips = gateway.suggest_tasks(&tasks).await;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod prompts;
pub mod provider;

pub use client::GeminiClient;
pub use config::{SuggestConfig, DEFAULT_MODEL, GOOGLE_API_KEY_ENV};
pub use error::{Result, SuggestError};
pub use gateway::{Generated, ProviderFailure, SuggestionGateway};
pub use provider::TextGenerator;
