//! Task store.

use tokio::sync::RwLock;
use tracing::info;

use studydesk_models::{Task, TaskId, TaskPatch};

use crate::error::{Result, StoreError};

/// Ordered, in-memory collection of tasks.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Appends a new, incomplete task and returns it.
    pub async fn create(&self, text: impl Into<String>) -> Task {
        let task = Task::new(text);
        self.tasks.write().await.push(task.clone());
        info!(task_id = %task.id, "task created");
        task
    }

    /// Applies `patch` to the first task with `id` and returns the result.
    pub async fn update(&self, id: &TaskId, patch: TaskPatch) -> Result<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| StoreError::TaskNotFound(id.to_string()))?;
        task.apply(patch);
        Ok(task.clone())
    }

    /// Removes every task with `id`. Returns how many were removed.
    pub async fn delete(&self, id: &TaskId) -> usize {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| &t.id != id);
        let removed = before - tasks.len();
        info!(task_id = %id, removed, "task delete");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_create_appends_in_order() {
        let store = TaskStore::new();
        let a = store.create("first").await;
        let b = store.create("second").await;

        let tasks = store.list().await;
        assert_eq!(tasks, vec![a, b]);
        assert!(tasks.iter().all(|t| !t.completed));
    }

    #[tokio::test]
    async fn test_created_ids_are_distinct() {
        let store = TaskStore::new();
        for i in 0..20 {
            store.create(format!("task {}", i)).await;
        }
        let ids: HashSet<_> = store.list().await.into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[tokio::test]
    async fn test_update_changes_only_target() {
        let store = TaskStore::new();
        let a = store.create("a").await;
        let b = store.create("b").await;

        let updated = store
            .update(&b.id, TaskPatch::default().with_completed(true))
            .await
            .unwrap();
        assert_eq!(updated.text, "b");
        assert!(updated.completed);

        let tasks = store.list().await;
        assert_eq!(tasks[0], a);
        assert_eq!(tasks[1], updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_leaves_store_untouched() {
        let store = TaskStore::new();
        store.create("a").await;
        let before = store.list().await;

        let result = store
            .update(
                &TaskId::from_string("missing"),
                TaskPatch::default().with_text("x"),
            )
            .await;

        assert_eq!(result, Err(StoreError::TaskNotFound("missing".to_string())));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_delete_is_tolerant() {
        let store = TaskStore::new();
        let a = store.create("a").await;
        let b = store.create("b").await;
        let c = store.create("c").await;

        assert_eq!(store.delete(&b.id).await, 1);
        assert_eq!(store.delete(&b.id).await, 0);
        assert_eq!(store.delete(&TaskId::from_string("nope")).await, 0);
        assert_eq!(store.list().await, vec![a, c]);
    }
}
