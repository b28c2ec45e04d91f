//! Failure types for the powercfg integration
//!
//! Plan enumeration and plan activation fail in different ways and are
//! surfaced differently (fatal startup abort vs. in-window dialog), so
//! each gets its own error enum.

use thiserror::Error;

/// Errors while discovering plans or the active plan at startup
#[derive(Debug, Error)]
pub enum EnumerationError {
    #[error("failed to run '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not extract a plan identifier from '{command}' output: {output:?}")]
    UnparseableOutput { command: String, output: String },
}

/// Errors while activating a plan
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("failed to run '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not activate plan {guid}: {diagnostic}")]
    Rejected { guid: String, diagnostic: String },
}
