//! Feedback records.
//!
//! Two shapes share one collection: full reviews submitted with a title and a
//! comment, and free-text notes. Both serialize without a tag, so clients see
//! either `{id, title, comment}` or `{id, text}`.

use serde::{Deserialize, Serialize};

use crate::ids::FeedbackId;

/// A feedback entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Feedback {
    /// Titled review with a comment body.
    Review {
        /// Unique identifier.
        id: FeedbackId,
        /// Review title.
        title: String,
        /// Review body.
        comment: String,
    },
    /// Free-text note.
    Note {
        /// Unique identifier.
        id: FeedbackId,
        /// Note body.
        text: String,
    },
}

impl Feedback {
    /// Creates a titled review.
    pub fn review(title: impl Into<String>, comment: impl Into<String>) -> Self {
        Self::Review {
            id: FeedbackId::new(),
            title: title.into(),
            comment: comment.into(),
        }
    }

    /// Creates a free-text note.
    pub fn note(text: impl Into<String>) -> Self {
        Self::Note {
            id: FeedbackId::new(),
            text: text.into(),
        }
    }

    /// Returns the entry's ID.
    pub fn id(&self) -> &FeedbackId {
        match self {
            Self::Review { id, .. } | Self::Note { id, .. } => id,
        }
    }

    /// Renders the entry as one sentence-like fragment for summaries.
    ///
    /// Reviews become `"title. comment"`, notes are their text.
    pub fn digest(&self) -> String {
        match self {
            Self::Review { title, comment, .. } => format!("{}. {}", title, comment),
            Self::Note { text, .. } => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_serializes_flat() {
        let fb = Feedback::Review {
            id: FeedbackId::from_string("fb-1"),
            title: "Great".to_string(),
            comment: "Loved it".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&fb).unwrap(),
            json!({"id": "fb-1", "title": "Great", "comment": "Loved it"})
        );
    }

    #[test]
    fn test_note_serializes_flat() {
        let fb = Feedback::Note {
            id: FeedbackId::from_string("fb-2"),
            text: "Too fast".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&fb).unwrap(),
            json!({"id": "fb-2", "text": "Too fast"})
        );
    }

    #[test]
    fn test_deserialize_picks_variant_by_fields() {
        let review: Feedback =
            serde_json::from_value(json!({"id": "fb-1", "title": "A", "comment": "B"})).unwrap();
        assert!(matches!(review, Feedback::Review { .. }));

        let note: Feedback = serde_json::from_value(json!({"id": "fb-2", "text": "C"})).unwrap();
        assert!(matches!(note, Feedback::Note { .. }));
    }

    #[test]
    fn test_digest() {
        assert_eq!(Feedback::review("Pace", "A bit slow").digest(), "Pace. A bit slow");
        assert_eq!(Feedback::note("More labs please").digest(), "More labs please");
    }
}
