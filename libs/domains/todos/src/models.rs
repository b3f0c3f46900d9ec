use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use validator::Validate;

/// Todo entity - a single tracked task
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Todo {
    /// Unique identifier
    pub id: i32,
    /// Short title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Whether the todo has been completed
    pub is_completed: bool,
    /// Creation timestamp
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new todo
///
/// Both fields default to empty strings when absent, so a missing field
/// and an empty field fail validation the same way.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct CreateTodo {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub description: String,
}

/// Slim projection returned by the recent-incomplete listing.
///
/// The listing only ever contains incomplete todos, so the completion
/// flag is omitted from the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TodoSummary {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Response body for a successful completion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompletionResponse {
    pub message: String,
}

impl CompletionResponse {
    pub fn completed() -> Self {
        Self {
            message: "Todo marked as completed".to_string(),
        }
    }
}

impl From<Todo> for TodoSummary {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            created_at: todo.created_at,
        }
    }
}
