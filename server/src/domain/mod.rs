//! Domain logic

pub mod traces;

pub use traces::TracePipeline;
