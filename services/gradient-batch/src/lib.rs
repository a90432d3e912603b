//! Batch driver for shoreline gradient processing.
//!
//! Exposed as a library so the pipeline can be exercised end to end by
//! integration tests; the binary in `main.rs` is a thin CLI wrapper.

pub mod pipeline;

pub use pipeline::{run, PipelineStats};
