//! Configuration shared by the registry and the evaluator.

pub mod options;

pub use options::{BuildOptions, ExecutionOptions};
