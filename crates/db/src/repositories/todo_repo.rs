//! Repository for the `todos` table.

use sqlx::SqlitePool;
use todolist_core::types::DbId;

use crate::models::todo::{Todo, UpsertTodoItem};

/// Column list for `todos` queries.
const COLUMNS: &str = "id, name, is_complete, secret";

/// Provides CRUD operations for todo items.
pub struct TodoRepo;

impl TodoRepo {
    /// List all todos in insertion (id) order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Fetch a single todo by id.
    ///
    /// Returns `None` if no row with that id exists.
    pub async fn get(pool: &SqlitePool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new todo. The database allocates the id.
    pub async fn create(pool: &SqlitePool, dto: &UpsertTodoItem) -> Result<Todo, sqlx::Error> {
        let query =
            format!("INSERT INTO todos (name, is_complete) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Todo>(&query)
            .bind(&dto.name)
            .bind(dto.is_complete)
            .fetch_one(pool)
            .await
    }

    /// Overwrite `name` and `is_complete` of an existing todo.
    ///
    /// Returns `None` if the id does not exist; a missing id is never
    /// turned into an insert.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        dto: &UpsertTodoItem,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET name = $2, is_complete = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.is_complete)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo, returning the removed row.
    ///
    /// Returns `None` if the id does not exist.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("DELETE FROM todos WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
