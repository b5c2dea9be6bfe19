//! # witaj-store
//!
//! SQLite-backed persistence for witaj: the read-only language table and
//! the todo list.

mod store;

pub use store::Store;
