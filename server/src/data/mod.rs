//! Data layer: storage services and repositories

pub mod sqlite;
pub mod types;

pub use sqlite::{SqliteError, SqliteService};
pub use types::SpanRecord;
