//! Feedback store.
//!
//! Reviews and notes live in the same ordered list. The two create
//! operations differ in what they return: `create_full` hands back the whole
//! collection, `create_text_only` just the new entry.

use tokio::sync::RwLock;
use tracing::{debug, info};

use studydesk_models::{Feedback, FeedbackId};

/// Ordered, in-memory collection of feedback entries.
#[derive(Debug, Default)]
pub struct FeedbackStore {
    entries: RwLock<Vec<Feedback>>,
}

impl FeedbackStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all entries in insertion order.
    pub async fn list(&self) -> Vec<Feedback> {
        self.entries.read().await.clone()
    }

    /// Appends a review when both `title` and `comment` are non-empty.
    ///
    /// Always returns the full collection as it stands afterwards. A missing
    /// field is not an error; the collection is returned unchanged.
    pub async fn create_full(&self, title: Option<&str>, comment: Option<&str>) -> Vec<Feedback> {
        let mut entries = self.entries.write().await;
        match (title, comment) {
            (Some(title), Some(comment)) if !title.is_empty() && !comment.is_empty() => {
                let review = Feedback::review(title, comment);
                info!(feedback_id = %review.id(), "review submitted");
                entries.push(review);
            }
            _ => debug!("review skipped: title or comment missing"),
        }
        entries.clone()
    }

    /// Appends a free-text note and returns it.
    pub async fn create_text_only(&self, text: impl Into<String>) -> Feedback {
        let note = Feedback::note(text);
        self.entries.write().await.push(note.clone());
        info!(feedback_id = %note.id(), "note added");
        note
    }

    /// Removes every entry with `id`. Returns how many were removed.
    pub async fn delete(&self, id: &FeedbackId) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|f| f.id() != id);
        let removed = before - entries.len();
        info!(feedback_id = %id, removed, "feedback delete");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_full_returns_whole_list() {
        let store = FeedbackStore::new();
        let note = store.create_text_only("first").await;

        let all = store.create_full(Some("A"), Some("B")).await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], note);
        assert!(matches!(
            &all[1],
            Feedback::Review { title, comment, .. } if title == "A" && comment == "B"
        ));
    }

    #[tokio::test]
    async fn test_create_full_missing_field_is_noop() {
        let store = FeedbackStore::new();
        store.create_full(Some("A"), Some("B")).await;

        let before = store.list().await;
        assert_eq!(store.create_full(Some("A"), None).await, before);
        assert_eq!(store.create_full(None, Some("B")).await, before);
        assert_eq!(store.create_full(Some(""), Some("B")).await, before);
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_text_only_accepts_empty() {
        let store = FeedbackStore::new();
        let note = store.create_text_only("").await;
        assert!(matches!(&note, Feedback::Note { text, .. } if text.is_empty()));
        assert_eq!(store.list().await, vec![note]);
    }

    #[tokio::test]
    async fn test_delete_either_shape() {
        let store = FeedbackStore::new();
        let note = store.create_text_only("n").await;
        let all = store.create_full(Some("t"), Some("c")).await;
        let review_id = all[1].id().clone();

        assert_eq!(store.delete(&review_id).await, 1);
        assert_eq!(store.list().await, vec![note.clone()]);
        assert_eq!(store.delete(note.id()).await, 1);
        assert_eq!(store.delete(note.id()).await, 0);
        assert!(store.list().await.is_empty());
    }
}
