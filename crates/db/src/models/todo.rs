//! Todo item model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todolist_core::types::DbId;

/// A row from the `todos` table.
///
/// Deliberately not `Serialize`: `secret` must never cross the API
/// boundary, so every outbound path goes through [`TodoItem`].
#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub name: Option<String>,
    pub is_complete: bool,
    pub secret: Option<String>,
}

/// Public shape of a todo: [`Todo`] minus `secret`.
///
/// Serialized camelCase (`isComplete`) to match the published JSON
/// contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: DbId,
    pub name: Option<String>,
    pub is_complete: bool,
}

impl From<&Todo> for TodoItem {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            name: todo.name.clone(),
            is_complete: todo.is_complete,
        }
    }
}

/// Request body for creating or replacing a todo.
///
/// Only `name` and `isComplete` are settable from outside; serde drops
/// unknown body fields (`id`, `secret`, ...), which closes the
/// over-posting hole. A missing `isComplete` means `false`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertTodoItem {
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}
