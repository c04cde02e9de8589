//! Course records.

use serde::{Deserialize, Serialize};

use crate::ids::CourseId;

/// A course in the catalogue. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for the course.
    pub id: CourseId,
    /// Course title.
    pub title: String,
    /// Short description.
    pub description: String,
}

impl Course {
    /// Creates a new course.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: CourseId::new(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Renders the course as `"title: description"`.
    pub fn headline(&self) -> String {
        format!("{}: {}", self.title, self.description)
    }
}
