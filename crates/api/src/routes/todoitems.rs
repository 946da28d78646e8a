//! Route definitions for the `/todoitems` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::todoitems;
use crate::state::AppState;

/// Todo item routes mounted at `/todoitems`.
///
/// ```text
/// GET    /       -> list_todos
/// POST   /       -> create_todo
/// GET    /{id}   -> get_todo
/// PUT    /{id}   -> update_todo
/// DELETE /{id}   -> delete_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todoitems::list_todos).post(todoitems::create_todo))
        .route(
            "/{id}",
            get(todoitems::get_todo)
                .put(todoitems::update_todo)
                .delete(todoitems::delete_todo),
        )
}
