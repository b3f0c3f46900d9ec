//! Todos Domain
//!
//! This module provides a complete domain implementation for tracking todos:
//! create a todo, list the most recent incomplete ones, and mark a todo
//! as completed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{PgTodoRepository, TodoService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a database connection
//! let db = Database::connect("postgres://...").await?;
//!
//! // Create a repository and service
//! let repository = PgTodoRepository::new(db);
//! let service = TodoService::new(repository);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TodoError, TodoResult};
pub use handlers::ApiDoc;
pub use models::{CompletionResponse, CreateTodo, Todo, TodoSummary};
pub use postgres::PgTodoRepository;
pub use repository::TodoRepository;
pub use service::{RECENT_LIMIT, TodoService};
