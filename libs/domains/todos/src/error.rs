use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    /// Missing or empty title/description. One message covers every
    /// validation failure, matching the API contract.
    #[error("Title and description are required")]
    Validation,

    /// The todo does not exist or was already completed. The two cases
    /// are deliberately indistinguishable to the caller.
    #[error("Todo not found or already completed")]
    NotFound,

    /// Storage failure surfaced with a per-operation message; the
    /// underlying cause is logged, never sent to the client.
    #[error("{0}")]
    Storage(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

/// Convert TodoError to AppError for standardized error responses
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::Validation => AppError::BadRequest(err.to_string()),
            TodoError::NotFound => AppError::NotFound(err.to_string()),
            TodoError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for TodoError {
    fn from(err: sea_orm::DbErr) -> Self {
        TodoError::Storage(err.to_string())
    }
}
