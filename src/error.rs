//! Error taxonomy for the visualization pipeline.
//!
//! Every condition here is fatal to the run; the tool is a single-shot batch
//! computation with no retry path. `main` returns `anyhow::Result`, so any of
//! these surfaces as a diagnostic message and exit code 1.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("log file not found at {}", .0.display())]
    LogNotFound(PathBuf),

    /// A matched timestamp group that fails float conversion. The line regex
    /// should make this impossible, but a matched group is still converted
    /// fallibly rather than crashed through.
    #[error("malformed timestamp at {path}:{line}: {text:?}")]
    MalformedTimestamp {
        path: String,
        line: usize,
        text: String,
    },

    #[error("package listing failed: {0}")]
    ResolverFailure(String),

    #[error("{0}")]
    EmptyResultSet(String),
}
