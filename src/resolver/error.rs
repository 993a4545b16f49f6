//! Resolution errors.

use crate::core::Value;
use crate::numeral::NumeralError;
use crate::ops::OperatorError;
use thiserror::Error;

/// Errors that abort the resolution of a program.
///
/// Resolution either fully succeeds or fails as a whole. Writes made before
/// the failure stay in the store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolveError {
    #[error("Branch condition must be True or False, found {found}")]
    IllFormedCondition { found: Value },

    #[error("Resolution depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },

    #[error(transparent)]
    Operator(#[from] OperatorError),
}

impl From<NumeralError> for ResolveError {
    fn from(error: NumeralError) -> Self {
        Self::Operator(OperatorError::Numeral(error))
    }
}
