//! Todor - a single-user todo list with JSON-file persistence
//!
//! The library is two pieces: `TodoItem`, a single task record, and
//! `TodoStore`, an ordered in-memory list synced to one JSON file after
//! every mutation.

pub mod error;
pub mod item;
pub mod store;

pub use error::{Result, TodorError};
pub use item::TodoItem;
pub use store::TodoStore;
