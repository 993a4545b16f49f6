//! Non-negative integers used as variable payloads.
//!
//! Numerals behave like the successor-chain integers they stand in for:
//! subtraction saturates at zero and there are no negative values.
//! Division and remainder are computed together; dividing by zero is an
//! error instead of a computation that never ends.

mod error;

pub use error::NumeralError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative integer.
///
/// # Example
///
/// ```rust
/// use typevar::numeral::{self, Numeral};
///
/// let sum = numeral::add(Numeral::TWO, Numeral::TWO).unwrap();
/// assert_eq!(sum, Numeral::FOUR);
/// assert_eq!(numeral::minus(Numeral::TWO, Numeral::THREE), Numeral::ZERO);
/// assert_eq!(sum.cast(), 4);
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Numeral(u64);

impl Numeral {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);
    pub const SIX: Self = Self(6);
    pub const SEVEN: Self = Self(7);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The integer this numeral represents.
    pub const fn cast(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The successor of this numeral.
    pub fn succ(self) -> Result<Self, NumeralError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or(NumeralError::Overflow { op: "succ" })
    }

    /// The predecessor, or `None` for zero.
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl From<u64> for Numeral {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn add(lhs: Numeral, rhs: Numeral) -> Result<Numeral, NumeralError> {
    lhs.0
        .checked_add(rhs.0)
        .map(Numeral)
        .ok_or(NumeralError::Overflow { op: "add" })
}

pub fn mult(lhs: Numeral, rhs: Numeral) -> Result<Numeral, NumeralError> {
    lhs.0
        .checked_mul(rhs.0)
        .map(Numeral)
        .ok_or(NumeralError::Overflow { op: "mult" })
}

/// Subtraction that saturates at zero.
pub fn minus(lhs: Numeral, rhs: Numeral) -> Numeral {
    Numeral(lhs.0.saturating_sub(rhs.0))
}

/// Quotient and remainder of `lhs / rhs`.
pub fn div_rem(lhs: Numeral, rhs: Numeral) -> Result<(Numeral, Numeral), NumeralError> {
    if rhs.is_zero() {
        return Err(NumeralError::DivisionByZero);
    }
    Ok((Numeral(lhs.0 / rhs.0), Numeral(lhs.0 % rhs.0)))
}

pub fn div(lhs: Numeral, rhs: Numeral) -> Result<Numeral, NumeralError> {
    div_rem(lhs, rhs).map(|(quotient, _)| quotient)
}

pub fn remainder(lhs: Numeral, rhs: Numeral) -> Result<Numeral, NumeralError> {
    div_rem(lhs, rhs).map(|(_, rest)| rest)
}

pub fn leq(lhs: Numeral, rhs: Numeral) -> bool {
    lhs <= rhs
}

pub fn eq(lhs: Numeral, rhs: Numeral) -> bool {
    lhs == rhs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_returns_chain_length() {
        assert_eq!(Numeral::new(11).cast(), 11);
        assert_eq!(Numeral::ZERO.cast(), 0);
    }

    #[test]
    fn succ_and_prev_walk_the_chain() {
        assert_eq!(Numeral::ZERO.succ().unwrap(), Numeral::ONE);
        assert_eq!(Numeral::ONE.prev(), Some(Numeral::ZERO));
        assert_eq!(Numeral::ZERO.prev(), None);
        assert_eq!(
            Numeral::new(u64::MAX).succ(),
            Err(NumeralError::Overflow { op: "succ" })
        );
    }

    #[test]
    fn addition_identities() {
        assert_eq!(add(Numeral::ZERO, Numeral::ZERO).unwrap(), Numeral::ZERO);
        assert_eq!(add(Numeral::TWO, Numeral::TWO).unwrap(), Numeral::FOUR);
        assert_eq!(add(Numeral::ZERO, Numeral::SEVEN).unwrap(), Numeral::SEVEN);
    }

    #[test]
    fn multiplication_identities() {
        for n in 0..6 {
            let x = Numeral::new(n);
            assert_eq!(mult(Numeral::ONE, x).unwrap(), x);
            assert_eq!(mult(Numeral::ZERO, x).unwrap(), Numeral::ZERO);
        }
        assert_eq!(mult(Numeral::TWO, Numeral::TWO).unwrap(), Numeral::FOUR);
    }

    #[test]
    fn minus_saturates_at_zero() {
        assert_eq!(minus(Numeral::TWO, Numeral::THREE), Numeral::ZERO);
        assert_eq!(minus(Numeral::THREE, Numeral::THREE), Numeral::ZERO);
        assert_eq!(minus(Numeral::FOUR, Numeral::THREE), Numeral::ONE);
    }

    #[test]
    fn division_and_remainder() {
        assert_eq!(div(Numeral::THREE, Numeral::TWO).unwrap(), Numeral::ONE);
        assert_eq!(remainder(Numeral::THREE, Numeral::TWO).unwrap(), Numeral::ONE);
        assert_eq!(remainder(Numeral::TWO, Numeral::TWO).unwrap(), Numeral::ZERO);
        assert_eq!(div(Numeral::ZERO, Numeral::FIVE).unwrap(), Numeral::ZERO);
        for n in 0..6 {
            let x = Numeral::new(n);
            assert_eq!(div(x, Numeral::ONE).unwrap(), x);
        }
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(div(Numeral::FOUR, Numeral::ZERO), Err(NumeralError::DivisionByZero));
        assert_eq!(
            remainder(Numeral::ZERO, Numeral::ZERO),
            Err(NumeralError::DivisionByZero)
        );
    }

    #[test]
    fn comparisons() {
        assert!(leq(Numeral::ZERO, Numeral::ZERO));
        assert!(leq(Numeral::FOUR, Numeral::new(8)));
        assert!(leq(Numeral::FOUR, Numeral::FOUR));
        assert!(!leq(Numeral::FOUR, Numeral::THREE));
        assert!(eq(Numeral::SIX, Numeral::new(6)));
        assert!(!eq(Numeral::SIX, Numeral::FIVE));
    }

    #[test]
    fn overflow_is_reported() {
        let max = Numeral::new(u64::MAX);
        assert_eq!(add(max, Numeral::ONE), Err(NumeralError::Overflow { op: "add" }));
        assert_eq!(mult(max, Numeral::TWO), Err(NumeralError::Overflow { op: "mult" }));
    }

    #[test]
    fn numeral_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Numeral::new(21)).unwrap();
        assert_eq!(json, "21");
        let back: Numeral = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Numeral::new(21));
    }
}
