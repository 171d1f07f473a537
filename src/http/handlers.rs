//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and maps a parsed request
//! onto a repository call and the repository result onto a status code.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateTodoRequest, HealthResponse, UpdateTodoRequest};
use super::error::AppError;
use super::state::AppState;
use crate::db::repository::TodoRepository;
use crate::models::{Todo, TodoId};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository
/// is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Todo CRUD
// =============================================================================

/// GET /api/todos
///
/// List all todos.
pub async fn list_todos(State(state): State<AppState>) -> HandlerResult<Vec<Todo>> {
    let todos = state.repository.find_all().await?;
    Ok(Json(todos))
}

/// GET /api/todos/{id}
///
/// Fetch a single todo by id, or 404 if it does not exist.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Todo> {
    let id = TodoId::new(id);

    match state.repository.find_by_id(id).await? {
        Some(todo) => Ok(Json(todo)),
        None => Err(AppError::NotFound(format!("Todo {} not found", id))),
    }
}

/// POST /api/todos
///
/// Create a new todo from the request text. The server forces the id unset,
/// `completed` to false, and `createdAt` to the current time; any such fields
/// in the body are ignored.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = Todo::new(request.text.unwrap_or_default());
    let saved = state.repository.save(todo).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /api/todos/{id}
///
/// Update an existing todo, or 404 if it does not exist. Only `text` and
/// `completed` are copied from the body; id and `createdAt` are preserved.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTodoRequest>,
) -> HandlerResult<Todo> {
    let id = TodoId::new(id);

    // The existence check and the save are not atomic: concurrent updates to
    // the same id are last-write-wins.
    let Some(mut existing) = state.repository.find_by_id(id).await? else {
        return Err(AppError::NotFound(format!("Todo {} not found", id)));
    };

    existing.text = request.text.unwrap_or_default();
    existing.completed = request.completed;

    let updated = state.repository.save(existing).await?;
    Ok(Json(updated))
}

/// DELETE /api/todos/{id}
///
/// Delete a todo, or 404 if it does not exist.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let id = TodoId::new(id);

    if !state.repository.exists_by_id(id).await? {
        return Err(AppError::NotFound(format!("Todo {} not found", id)));
    }

    state.repository.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
