//! Model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - The `Serialize` transfer shape returned by the API
//! - A `Deserialize` DTO for request bodies

pub mod todo;
