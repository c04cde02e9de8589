//! In-memory stores for StudyDesk.
//!
//! Each store owns one ordered collection behind its own lock. Nothing is
//! persisted: stores start empty and are dropped with the process.
//!
//! # Example
//!
//! ```ignore
//! use studydesk_store::TaskStore;
//!
//! let store = TaskStore::new();
//! let task = store.create("Read chapter 1").await;
//! assert_eq!(store.list().await, vec![task]);
//! ```

pub mod course_store;
pub mod error;
pub mod feedback_store;
pub mod task_store;

pub use course_store::CourseStore;
pub use error::{Result, StoreError};
pub use feedback_store::FeedbackStore;
pub use task_store::TaskStore;
