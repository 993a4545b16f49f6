//! Build errors for block and loop builders.

use thiserror::Error;

/// Errors that can occur when building blocks and loops.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Block has no statements. Add at least one statement before .build()")]
    EmptyBlock,

    #[error("Loop body not specified. Call .body(body)")]
    MissingBody,

    #[error("Loop stop flag not specified. Call .until_false(name)")]
    MissingStopFlag,
}
