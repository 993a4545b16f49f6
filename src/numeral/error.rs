//! Numeral arithmetic errors.

use thiserror::Error;

/// Errors that can occur during numeral arithmetic.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NumeralError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Numeral overflow in {op}")]
    Overflow { op: &'static str },
}
