//! Arithmetic, comparison and logic operators over literals or variables.
//!
//! Each operand is resolved independently: a `Value::Name` is read from the
//! store in the given epoch, anything else is taken literally. The resolved
//! operands are then handed to the numeral layer or the sentinel logic.
//!
//! # Example
//!
//! ```rust
//! use typevar::core::{Epoch, Name, Value};
//! use typevar::ops;
//! use typevar::store::Store;
//!
//! let mut store = Store::new();
//! let epoch = Epoch::fresh();
//! let counter = Name::new("counter");
//! store.assign(&counter, 5u64, epoch);
//!
//! let doubled = ops::add(&store, &Value::from(&counter), &Value::from(&counter), epoch).unwrap();
//! assert_eq!(doubled, Value::from(10u64));
//!
//! let within = ops::leq(&store, &Value::from(&counter), &Value::from(5u64), epoch).unwrap();
//! assert_eq!(within, Value::True);
//! ```

mod error;
mod operand;

pub use error::OperatorError;
pub use operand::Operand;

use crate::core::{self, Epoch, Value};
use crate::numeral;
use crate::store::Store;
use operand::{boolean, numeral as numeral_operand, resolve};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-operand operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Minus,
    Mult,
    Divide,
    Remainder,
    Leq,
    Eq,
    And,
    Or,
    Xor,
}

/// One-operand operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Not,
    Succ,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Minus => "minus",
            Self::Mult => "mult",
            Self::Divide => "divide",
            Self::Remainder => "remainder",
            Self::Leq => "leq",
            Self::Eq => "eq",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
        }
    }

    pub fn apply(
        &self,
        store: &Store,
        lhs: &Value,
        rhs: &Value,
        epoch: Epoch,
    ) -> Result<Value, OperatorError> {
        match self {
            Self::Add => add(store, lhs, rhs, epoch),
            Self::Minus => minus(store, lhs, rhs, epoch),
            Self::Mult => mult(store, lhs, rhs, epoch),
            Self::Divide => divide(store, lhs, rhs, epoch),
            Self::Remainder => remainder(store, lhs, rhs, epoch),
            Self::Leq => leq(store, lhs, rhs, epoch),
            Self::Eq => Ok(eq(store, lhs, rhs, epoch)),
            Self::And => and(store, lhs, rhs, epoch),
            Self::Or => or(store, lhs, rhs, epoch),
            Self::Xor => xor(store, lhs, rhs, epoch),
        }
    }
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::Succ => "succ",
        }
    }

    pub fn apply(&self, store: &Store, operand: &Value, epoch: Epoch) -> Result<Value, OperatorError> {
        match self {
            Self::Not => not(store, operand, epoch),
            Self::Succ => succ(store, operand, epoch),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub fn add(store: &Store, lhs: &Value, rhs: &Value, epoch: Epoch) -> Result<Value, OperatorError> {
    let l = numeral_operand("add", store, lhs, epoch)?;
    let r = numeral_operand("add", store, rhs, epoch)?;
    Ok(numeral::add(l, r)?.into())
}

/// Subtraction, saturating at zero.
pub fn minus(store: &Store, lhs: &Value, rhs: &Value, epoch: Epoch) -> Result<Value, OperatorError> {
    let l = numeral_operand("minus", store, lhs, epoch)?;
    let r = numeral_operand("minus", store, rhs, epoch)?;
    Ok(numeral::minus(l, r).into())
}

pub fn mult(store: &Store, lhs: &Value, rhs: &Value, epoch: Epoch) -> Result<Value, OperatorError> {
    let l = numeral_operand("mult", store, lhs, epoch)?;
    let r = numeral_operand("mult", store, rhs, epoch)?;
    Ok(numeral::mult(l, r)?.into())
}

pub fn divide(store: &Store, lhs: &Value, rhs: &Value, epoch: Epoch) -> Result<Value, OperatorError> {
    let l = numeral_operand("divide", store, lhs, epoch)?;
    let r = numeral_operand("divide", store, rhs, epoch)?;
    Ok(numeral::div(l, r)?.into())
}

pub fn remainder(
    store: &Store,
    lhs: &Value,
    rhs: &Value,
    epoch: Epoch,
) -> Result<Value, OperatorError> {
    let l = numeral_operand("remainder", store, lhs, epoch)?;
    let r = numeral_operand("remainder", store, rhs, epoch)?;
    Ok(numeral::remainder(l, r)?.into())
}

pub fn leq(store: &Store, lhs: &Value, rhs: &Value, epoch: Epoch) -> Result<Value, OperatorError> {
    let l = numeral_operand("leq", store, lhs, epoch)?;
    let r = numeral_operand("leq", store, rhs, epoch)?;
    Ok(numeral::leq(l, r).into())
}

/// Structural identity of the resolved operands. Accepts any descriptor.
pub fn eq(store: &Store, lhs: &Value, rhs: &Value, epoch: Epoch) -> Value {
    core::is_same(&resolve(store, lhs, epoch), &resolve(store, rhs, epoch))
}

pub fn succ(store: &Store, operand: &Value, epoch: Epoch) -> Result<Value, OperatorError> {
    let n = numeral_operand("succ", store, operand, epoch)?;
    Ok(n.succ()?.into())
}

pub fn not(store: &Store, operand: &Value, epoch: Epoch) -> Result<Value, OperatorError> {
    let v = boolean("not", store, operand, epoch)?;
    core::not(&v).map_err(|e| OperatorError::NotABoolean {
        op: "not",
        found: e.found,
    })
}

fn logic(
    op: &'static str,
    apply: fn(&Value, &Value) -> Result<Value, core::NotABoolean>,
    store: &Store,
    lhs: &Value,
    rhs: &Value,
    epoch: Epoch,
) -> Result<Value, OperatorError> {
    let l = boolean(op, store, lhs, epoch)?;
    let r = boolean(op, store, rhs, epoch)?;
    apply(&l, &r).map_err(|e| OperatorError::NotABoolean { op, found: e.found })
}

pub fn and(store: &Store, lhs: &Value, rhs: &Value, epoch: Epoch) -> Result<Value, OperatorError> {
    logic("and", core::and, store, lhs, rhs, epoch)
}

pub fn or(store: &Store, lhs: &Value, rhs: &Value, epoch: Epoch) -> Result<Value, OperatorError> {
    logic("or", core::or, store, lhs, rhs, epoch)
}

pub fn xor(store: &Store, lhs: &Value, rhs: &Value, epoch: Epoch) -> Result<Value, OperatorError> {
    logic("xor", core::xor, store, lhs, rhs, epoch)
}
