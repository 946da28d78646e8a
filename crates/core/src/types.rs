/// All database primary keys are SQLite INTEGER (64-bit) rowids.
pub type DbId = i64;
