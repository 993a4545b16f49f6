//! Statements: the units a block resolves in order.

use crate::control::{self, Body, DoWhile};
use crate::core::{Epoch, Name, Value};
use crate::ops::Operand;
use crate::resolver::{Expr, ResolveError, Resolver};
use std::sync::Arc;
use tracing::debug;

/// One step of a program.
///
/// Resolving a statement may write to the store and yields a value.
pub trait Statement: Send + Sync {
    fn resolve(&self, rt: &mut Resolver, epoch: Epoch) -> Result<Value, ResolveError>;
}

impl<S: Statement + ?Sized> Statement for Box<S> {
    fn resolve(&self, rt: &mut Resolver, epoch: Epoch) -> Result<Value, ResolveError> {
        (**self).resolve(rt, epoch)
    }
}

impl<S: Statement + ?Sized> Statement for Arc<S> {
    fn resolve(&self, rt: &mut Resolver, epoch: Epoch) -> Result<Value, ResolveError> {
        (**self).resolve(rt, epoch)
    }
}

/// `name = expr`. Every resolution appends a new entry.
#[derive(Clone, Debug)]
pub struct Assign {
    pub name: Name,
    pub expr: Expr,
}

impl Assign {
    pub fn new(name: &Name, expr: impl Into<Expr>) -> Self {
        Self {
            name: name.clone(),
            expr: expr.into(),
        }
    }
}

impl Statement for Assign {
    fn resolve(&self, rt: &mut Resolver, epoch: Epoch) -> Result<Value, ResolveError> {
        let value = rt.eval(&self.expr, epoch)?;
        rt.assign(&self.name, value.clone(), epoch);
        Ok(value)
    }
}

/// Evaluate a branch condition. A name is read once, like an operand.
fn condition(rt: &mut Resolver, cond: &Expr, epoch: Epoch) -> Result<Value, ResolveError> {
    let value = rt.eval(cond, epoch)?;
    Ok(Operand::classify(&value).resolve(rt.store(), epoch))
}

/// Branch without an else arm.
#[derive(Clone)]
pub struct If {
    pub cond: Expr,
    pub body: Arc<dyn Body>,
    pub args: Expr,
}

impl Statement for If {
    fn resolve(&self, rt: &mut Resolver, epoch: Epoch) -> Result<Value, ResolveError> {
        let cond = condition(rt, &self.cond, epoch)?;
        control::if_(rt, &cond, self.body.as_ref(), &self.args, epoch)
    }
}

/// Branch with both arms sharing one body.
#[derive(Clone)]
pub struct IfElse {
    pub cond: Expr,
    pub body: Arc<dyn Body>,
    pub if_true: Expr,
    pub if_false: Expr,
}

impl Statement for IfElse {
    fn resolve(&self, rt: &mut Resolver, epoch: Epoch) -> Result<Value, ResolveError> {
        let cond = condition(rt, &self.cond, epoch)?;
        control::if_else(
            rt,
            &cond,
            self.body.as_ref(),
            &self.if_true,
            &self.if_false,
            epoch,
        )
    }
}

/// A loop over a shared body, as produced by [`LoopBuilder`](super::LoopBuilder).
pub type Loop = DoWhile<Arc<dyn Body>>;

/// A loop yields `None` once it terminates.
impl<B: Body> Statement for DoWhile<B> {
    fn resolve(&self, rt: &mut Resolver, epoch: Epoch) -> Result<Value, ResolveError> {
        let outcome = self.run(rt, epoch)?;
        debug!(iterations = outcome.iterations, "loop statement resolved");
        Ok(Value::None)
    }
}
