//! HTTP API layer

pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod server;

pub use server::ApiServer;
