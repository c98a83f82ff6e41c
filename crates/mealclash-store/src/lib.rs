//! mealclash-store — SQLite-backed meal record store.
//!
//! Implements the `MealStore` trait over a `rusqlite::Connection` with an
//! idempotent schema, parameterized statements, and soft-delete semantics.

mod kitchen;
mod schema;

pub use kitchen::SqliteKitchen;
