//! Trace ingestion domain
//!
//! Turns OTLP trace requests into enriched, task-correlated span records:
//!
//! | Stage        | Input                           | Output               | Module          |
//! |--------------|---------------------------------|----------------------|-----------------|
//! | Attributes   | flat `KeyValue` list per span   | nested JSON tree     | `attributes.rs` |
//! | Normalize    | OTLP `Span`                     | `Option<SpanRecord>` | `normalize.rs`  |
//! | Correlate    | last-span correlation fields    | back-filled batch    | `correlate.rs`  |
//! | Persist      | raw request + record batch      | row appends          | `pipeline.rs`   |
//!
//! Instrumentation opts a span into export by emitting attributes under the
//! `gen_ai.*` namespace and links it to an application-level task and session
//! via the optional `phospho.*` namespace. Spans that carry no correlation
//! fields of their own inherit them from the last span of the trace.

mod attributes;
mod correlate;
mod normalize;
mod pipeline;

pub use attributes::build_attribute_tree;
pub use correlate::TraceFallback;
pub use normalize::{SpanCorrelation, normalize_span};
pub use pipeline::{PipelineError, TracePipeline};

/// Reserved attribute namespaces and sub-keys
pub(crate) mod keys {
    /// Namespace carrying task/session correlation fields
    pub const PHOSPHO: &str = "phospho";

    /// Export-eligibility marker namespace
    pub const GEN_AI: &str = "gen_ai";

    pub const TASK_ID: &str = "task_id";
    pub const SESSION_ID: &str = "session_id";
    pub const METADATA: &str = "metadata";
}
