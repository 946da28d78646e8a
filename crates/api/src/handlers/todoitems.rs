//! Handlers for the `/todoitems` resource.
//!
//! Each handler performs exactly one store operation and projects the
//! result through [`TodoItem`], so the internal `secret` column never
//! reaches a response body. That includes DELETE: the record is echoed
//! back, but projected like every other path.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use todolist_core::error::CoreError;
use todolist_core::types::DbId;
use todolist_db::models::todo::{TodoItem, UpsertTodoItem};
use todolist_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /todoitems
///
/// List all todos.
pub async fn list_todos(State(state): State<AppState>) -> AppResult<Json<Vec<TodoItem>>> {
    let todos = TodoRepo::list(&state.pool).await?;

    Ok(Json(todos.iter().map(TodoItem::from).collect()))
}

/// GET /todoitems/{id}
///
/// Fetch a single todo. Returns 404 if the id does not exist.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TodoItem>> {
    let todo = TodoRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    Ok(Json(TodoItem::from(&todo)))
}

/// POST /todoitems
///
/// Create a todo. The store allocates the id; any id or secret in the
/// request body is ignored. Responds 201 with the created todo and a
/// `Location` header pointing at it.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<UpsertTodoItem>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(id = todo.id, "Todo created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/todoitems/{}", todo.id))],
        Json(TodoItem::from(&todo)),
    ))
}

/// PUT /todoitems/{id}
///
/// Overwrite a todo's name and completion flag. Responds 204 on
/// success, 404 if the id does not exist (never an insert).
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertTodoItem>,
) -> AppResult<StatusCode> {
    TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /todoitems/{id}
///
/// Delete a todo, echoing the removed record. Returns 404 if the id
/// does not exist.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TodoItem>> {
    let todo = TodoRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(id, "Todo deleted");

    Ok(Json(TodoItem::from(&todo)))
}
