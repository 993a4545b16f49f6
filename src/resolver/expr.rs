//! Unevaluated expressions.

use super::error::ResolveError;
use super::Resolver;
use crate::core::{Epoch, Name, Value};
use crate::numeral::Numeral;
use crate::ops::{BinaryOp, UnaryOp};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

type Thunk = dyn Fn(&mut Resolver, Epoch) -> Result<Value, ResolveError> + Send + Sync;

/// A computation with store access that runs only when forced.
#[derive(Clone)]
pub struct Deferred(Arc<Thunk>);

impl Deferred {
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn(&mut Resolver, Epoch) -> Result<Value, ResolveError> + Send + Sync + 'static,
    {
        Self(Arc::new(thunk))
    }

    pub fn force(&self, rt: &mut Resolver, epoch: Epoch) -> Result<Value, ResolveError> {
        trace!(%epoch, "forcing deferred expression");
        (self.0)(rt, epoch)
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deferred(..)")
    }
}

/// An expression that is evaluated against the store only when a body or
/// statement asks for its value.
///
/// A literal name is a variable operand: operators read it from the store,
/// while an assignment stores the name itself. Use [`Expr::read`] to copy a
/// variable's current value.
#[derive(Clone, Debug)]
pub enum Expr {
    Literal(Value),
    Read(Name),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Deferred(Deferred),
}

impl Expr {
    pub fn lit(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    pub fn read(name: &Name) -> Self {
        Self::Read(name.clone())
    }

    pub fn none() -> Self {
        Self::Literal(Value::None)
    }

    pub fn deferred<F>(thunk: F) -> Self
    where
        F: Fn(&mut Resolver, Epoch) -> Result<Value, ResolveError> + Send + Sync + 'static,
    {
        Self::Deferred(Deferred::new(thunk))
    }

    pub fn unary(op: UnaryOp, operand: impl Into<Expr>) -> Self {
        Self::Unary(op, Box::new(operand.into()))
    }

    pub fn binary(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::Binary(op, Box::new(lhs.into()), Box::new(rhs.into()))
    }

    pub fn add(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Add, lhs, rhs)
    }

    pub fn minus(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Minus, lhs, rhs)
    }

    pub fn mult(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Mult, lhs, rhs)
    }

    pub fn divide(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Divide, lhs, rhs)
    }

    pub fn remainder(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Remainder, lhs, rhs)
    }

    pub fn leq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Leq, lhs, rhs)
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Eq, lhs, rhs)
    }

    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn xor(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Xor, lhs, rhs)
    }

    pub fn not(operand: impl Into<Expr>) -> Self {
        Self::unary(UnaryOp::Not, operand)
    }

    pub fn succ(operand: impl Into<Expr>) -> Self {
        Self::unary(UnaryOp::Succ, operand)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<Numeral> for Expr {
    fn from(value: Numeral) -> Self {
        Self::Literal(value.into())
    }
}

impl From<u64> for Expr {
    fn from(value: u64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Literal(value.into())
    }
}

impl From<&Name> for Expr {
    fn from(name: &Name) -> Self {
        Self::Literal(name.into())
    }
}

impl From<Name> for Expr {
    fn from(name: Name) -> Self {
        Self::Literal(name.into())
    }
}

impl From<Deferred> for Expr {
    fn from(deferred: Deferred) -> Self {
        Self::Deferred(deferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_build_the_expected_tree() {
        let counter = Name::new("counter");
        let expr = Expr::leq(&counter, 5u64);

        match expr {
            Expr::Binary(BinaryOp::Leq, lhs, rhs) => {
                assert!(matches!(*lhs, Expr::Literal(Value::Name(ref n)) if n == &counter));
                assert!(matches!(*rhs, Expr::Literal(Value::Numeral(n)) if n.cast() == 5));
            }
            other => panic!("unexpected expression: {other:?}"),
        }
    }

    #[test]
    fn deferred_debug_hides_the_closure() {
        let expr = Expr::deferred(|_, _| Ok(Value::None));
        assert_eq!(format!("{expr:?}"), "Deferred(Deferred(..))");
    }
}
