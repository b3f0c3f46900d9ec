use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{TodoError, TodoResult};
use crate::models::{CompletionResponse, CreateTodo, Todo, TodoSummary};
use crate::repository::TodoRepository;
use crate::service::TodoService;

/// OpenAPI documentation for the Todos API
#[derive(OpenApi)]
#[openapi(
    paths(list_todos, create_todo, complete_todo),
    components(schemas(Todo, CreateTodo, TodoSummary, CompletionResponse)),
    tags(
        (name = "todos", description = "Todo task tracking operations")
    )
)]
pub struct ApiDoc;

/// List the most recent incomplete todos
#[utoipa::path(
    get,
    path = "",
    tag = "todos",
    responses(
        (status = 200, description = "Up to five most recent incomplete todos", body = Vec<TodoSummary>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
) -> TodoResult<Json<Vec<TodoSummary>>> {
    let todos = service.list_recent().await?;
    Ok(Json(todos))
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "",
    tag = "todos",
    request_body = CreateTodo,
    responses(
        (status = 201, description = "Todo created successfully", body = Todo),
        (status = 400, description = "Missing title or description"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> TodoResult<impl IntoResponse> {
    // Malformed bodies and wrongly-typed fields get the same answer
    // as missing fields
    let Json(input) = payload.map_err(|_| TodoError::Validation)?;

    let todo = service.create_todo(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Mark a todo as completed
#[utoipa::path(
    put,
    path = "/{id}/complete",
    tag = "todos",
    params(
        ("id" = String, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo marked as completed", body = CompletionResponse),
        (status = 404, description = "Todo not found or already completed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn complete_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    Path(id): Path<String>,
) -> TodoResult<Json<CompletionResponse>> {
    // A non-numeric id is indistinguishable from a missing one
    let todo_id: i32 = id.parse().map_err(|_| TodoError::NotFound)?;

    service.complete_todo(todo_id).await?;
    Ok(Json(CompletionResponse::completed()))
}

/// Create the todos router with the service as shared state
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{id}/complete", put(complete_todo))
        .with_state(shared_service)
}
