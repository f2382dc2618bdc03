//! phospho telemetry ingestion server
//!
//! Ingests OTLP traces from instrumented LLM applications, reconstructs
//! nested span attributes from their flattened wire encoding, correlates
//! spans with application-level tasks and sessions, and persists both raw
//! and enriched records for querying.

mod app;

pub mod api;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;
