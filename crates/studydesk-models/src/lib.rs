//! Core data models for StudyDesk.
//!
//! This crate provides the record types kept by the in-memory stores:
//! tasks, courses, and feedback, along with their typed identifiers.

pub mod course;
pub mod feedback;
pub mod ids;
pub mod task;

// Re-export main types
pub use course::Course;
pub use feedback::Feedback;
pub use ids::{CourseId, FeedbackId, TaskId};
pub use task::{Task, TaskPatch};
