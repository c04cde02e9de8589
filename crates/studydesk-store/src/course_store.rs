//! Course store.

use tokio::sync::RwLock;
use tracing::info;

use studydesk_models::{Course, CourseId};

/// Ordered, in-memory collection of courses.
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: RwLock<Vec<Course>>,
}

impl CourseStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all courses in insertion order.
    pub async fn list(&self) -> Vec<Course> {
        self.courses.read().await.clone()
    }

    /// Appends a new course and returns it.
    pub async fn create(&self, title: impl Into<String>, description: impl Into<String>) -> Course {
        let course = Course::new(title, description);
        self.courses.write().await.push(course.clone());
        info!(course_id = %course.id, "course created");
        course
    }

    /// Removes every course with `id`. Returns how many were removed.
    pub async fn delete(&self, id: &CourseId) -> usize {
        let mut courses = self.courses.write().await;
        let before = courses.len();
        courses.retain(|c| &c.id != id);
        let removed = before - courses.len();
        info!(course_id = %id, removed, "course delete");
        removed
    }
}
