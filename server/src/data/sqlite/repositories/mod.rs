//! SQLite repositories
//!
//! Plain async functions over a `&SqlitePool`, one module per table.

pub mod raw_traces;
pub mod spans;
