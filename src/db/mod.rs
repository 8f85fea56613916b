//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `actor.rs`: the pool owner; all SQL runs here
//! - `traits.rs`: the `TodoStore` contract the service consumes

pub mod actor;
pub mod models;
pub mod schema;
pub mod traits;

pub use actor::{DbActorHandle, spawn};
pub use models::{DbTodo, TodoRecord};
pub use schema::SQLITE_INIT;
pub use traits::TodoStore;
