//! Operator errors.

use crate::core::Value;
use crate::numeral::NumeralError;
use thiserror::Error;

/// Errors that can occur while applying an operator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OperatorError {
    #[error("Operator '{op}' expects a numeral, found {found}")]
    NotANumeral { op: &'static str, found: Value },

    #[error("Operator '{op}' expects True or False, found {found}")]
    NotABoolean { op: &'static str, found: Value },

    #[error(transparent)]
    Numeral(#[from] NumeralError),
}
