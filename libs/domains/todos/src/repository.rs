use async_trait::async_trait;

use crate::error::TodoResult;
use crate::models::{CreateTodo, Todo, TodoSummary};

/// Repository trait for Todo persistence
///
/// This trait defines the data access interface for todos.
/// Implementations can use different storage backends (PostgreSQL, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Create a new todo (stored as incomplete)
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo>;

    /// Get a todo by ID
    async fn find_by_id(&self, id: i32) -> TodoResult<Option<Todo>>;

    /// List the most recent incomplete todos, newest first.
    /// Ties on creation time break by descending id.
    async fn find_recent_incomplete(&self, limit: u64) -> TodoResult<Vec<TodoSummary>>;

    /// Atomically mark an incomplete todo as completed.
    ///
    /// Returns `true` when a row transitioned from incomplete to
    /// completed, `false` when no such row existed (missing id or
    /// already completed).
    async fn complete(&self, id: i32) -> TodoResult<bool>;
}
