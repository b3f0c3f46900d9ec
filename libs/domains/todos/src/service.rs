use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTodo, Todo, TodoSummary};
use crate::repository::TodoRepository;

/// How many todos the recent-incomplete listing returns, newest first.
pub const RECENT_LIMIT: u64 = 5;

/// Service layer for Todo business logic
#[derive(Clone)]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new todo with validation
    #[instrument(skip(self, input))]
    pub async fn create_todo(&self, input: CreateTodo) -> TodoResult<Todo> {
        input.validate().map_err(|_| TodoError::Validation)?;

        self.repository
            .create(input)
            .await
            .map_err(|e| storage_failure("Failed to create todo", e))
    }

    /// List the most recent incomplete todos (at most [`RECENT_LIMIT`])
    #[instrument(skip(self))]
    pub async fn list_recent(&self) -> TodoResult<Vec<TodoSummary>> {
        self.repository
            .find_recent_incomplete(RECENT_LIMIT)
            .await
            .map_err(|e| storage_failure("Failed to fetch todos", e))
    }

    /// Mark a todo as completed.
    ///
    /// A missing todo and an already-completed todo both produce
    /// [`TodoError::NotFound`]; the distinction is only logged.
    #[instrument(skip(self), fields(todo_id = id))]
    pub async fn complete_todo(&self, id: i32) -> TodoResult<()> {
        match self.repository.complete(id).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                match self.repository.find_by_id(id).await {
                    Ok(Some(_)) => {
                        tracing::debug!(todo_id = id, "Todo already completed");
                    }
                    Ok(None) => {
                        tracing::debug!(todo_id = id, "Todo does not exist");
                    }
                    Err(e) => {
                        tracing::debug!(todo_id = id, error = %e, "Could not inspect todo state");
                    }
                }
                Err(TodoError::NotFound)
            }
            Err(e) => Err(storage_failure("Failed to complete todo", e)),
        }
    }
}

/// Replace a storage error's message with the operation's canonical one,
/// logging the underlying cause.
fn storage_failure(message: &str, err: TodoError) -> TodoError {
    match err {
        TodoError::Storage(cause) => {
            tracing::error!(%cause, "{}", message);
            TodoError::Storage(message.to_string())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTodoRepository;
    use chrono::Utc;
    use mockall::predicate;

    fn sample_todo(id: i32) -> Todo {
        Todo {
            id,
            title: "Buy milk".to_string(),
            description: "2 liters".to_string(),
            is_completed: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_todo_success() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| {
                Ok(Todo {
                    id: 1,
                    title: input.title,
                    description: input.description,
                    is_completed: false,
                    created_at: Utc::now(),
                })
            })
            .times(1);

        let service = TodoService::new(mock_repo);
        let todo = service
            .create_todo(CreateTodo {
                title: "Buy milk".to_string(),
                description: "2 liters".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(todo.id, 1);
        assert!(!todo.is_completed);
    }

    #[tokio::test]
    async fn test_create_todo_rejects_empty_fields_without_touching_store() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo.expect_create().times(0);

        let service = TodoService::new(mock_repo);

        for (title, description) in [("", "desc"), ("title", ""), ("", "")] {
            let result = service
                .create_todo(CreateTodo {
                    title: title.to_string(),
                    description: description.to_string(),
                })
                .await;

            let err = result.unwrap_err();
            assert!(matches!(err, TodoError::Validation));
            assert_eq!(err.to_string(), "Title and description are required");
        }
    }

    #[tokio::test]
    async fn test_create_todo_collapses_storage_error() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(TodoError::Storage("connection reset".to_string())));

        let service = TodoService::new(mock_repo);
        let err = service
            .create_todo(CreateTodo {
                title: "t".to_string(),
                description: "d".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to create todo");
    }

    #[tokio::test]
    async fn test_list_recent_requests_fixed_limit() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_find_recent_incomplete()
            .with(predicate::eq(RECENT_LIMIT))
            .returning(|_| Ok(vec![TodoSummary::from(sample_todo(1))]))
            .times(1);

        let service = TodoService::new(mock_repo);
        let todos = service.list_recent().await.unwrap();
        assert_eq!(todos.len(), 1);
    }

    #[tokio::test]
    async fn test_list_recent_collapses_storage_error() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_find_recent_incomplete()
            .returning(|_| Err(TodoError::Storage("timeout".to_string())));

        let service = TodoService::new(mock_repo);
        let err = service.list_recent().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch todos");
    }

    #[tokio::test]
    async fn test_complete_todo_success() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_complete()
            .with(predicate::eq(7))
            .returning(|_| Ok(true))
            .times(1);
        mock_repo.expect_find_by_id().times(0);

        let service = TodoService::new(mock_repo);
        assert!(service.complete_todo(7).await.is_ok());
    }

    #[tokio::test]
    async fn test_complete_todo_missing_is_not_found() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_complete()
            .with(predicate::eq(42))
            .returning(|_| Ok(false));
        mock_repo
            .expect_find_by_id()
            .with(predicate::eq(42))
            .returning(|_| Ok(None));

        let service = TodoService::new(mock_repo);
        let err = service.complete_todo(42).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
        assert_eq!(err.to_string(), "Todo not found or already completed");
    }

    #[tokio::test]
    async fn test_complete_todo_already_completed_is_not_found() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo.expect_complete().returning(|_| Ok(false));
        mock_repo.expect_find_by_id().returning(|id| {
            let mut todo = sample_todo(id);
            todo.is_completed = true;
            Ok(Some(todo))
        });

        let service = TodoService::new(mock_repo);
        let err = service.complete_todo(9).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
    }

    #[tokio::test]
    async fn test_complete_todo_collapses_storage_error() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_complete()
            .returning(|_| Err(TodoError::Storage("deadlock".to_string())));

        let service = TodoService::new(mock_repo);
        let err = service.complete_todo(1).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to complete todo");
    }
}
