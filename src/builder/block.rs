//! Ordered statement sequences and their builder.

use super::error::BuildError;
use super::looping::LoopBuilder;
use super::statement::{Assign, If, IfElse, Statement};
use crate::control::Body;
use crate::core::{Epoch, Name, Value};
use crate::resolver::{Expr, ResolveError, Resolver};
use std::fmt;
use std::sync::Arc;

/// Statements resolved left to right, each in its own depth frame.
///
/// A block yields the value of its last statement. Called as a [`Body`] it
/// ignores its arguments, so a block can serve as a loop body.
#[derive(Clone, Default)]
pub struct Block {
    statements: Vec<Arc<dyn Statement>>,
}

impl Block {
    pub fn new(statements: Vec<Arc<dyn Statement>>) -> Self {
        Self { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Resolve every statement in order. An empty block yields `None`.
    pub fn run(&self, rt: &mut Resolver, epoch: Epoch) -> Result<Value, ResolveError> {
        let mut last = Value::None;
        for statement in &self.statements {
            last = rt.resolve(statement.as_ref(), epoch)?;
        }
        Ok(last)
    }
}

impl Statement for Block {
    fn resolve(&self, rt: &mut Resolver, epoch: Epoch) -> Result<Value, ResolveError> {
        self.run(rt, epoch)
    }
}

impl Body for Block {
    fn call(&self, rt: &mut Resolver, _args: &Expr, epoch: Epoch) -> Result<Value, ResolveError> {
        self.run(rt, epoch)
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("statements", &self.statements.len())
            .finish()
    }
}

/// Builder for blocks with a fluent API.
///
/// # Example
///
/// ```rust
/// use typevar::builder::BlockBuilder;
/// use typevar::core::{Epoch, Name, Value};
/// use typevar::resolver::{Expr, Resolver};
///
/// let x = Name::new("x");
/// let block = BlockBuilder::new()
///     .assign(&x, 1u64)
///     .assign(&x, Expr::add(&x, 1u64))
///     .build()
///     .unwrap();
///
/// let mut rt = Resolver::new();
/// let epoch = Epoch::fresh();
/// block.run(&mut rt, epoch).unwrap();
/// assert_eq!(rt.value(&x, epoch), Value::from(2u64));
/// ```
#[derive(Default)]
pub struct BlockBuilder {
    statements: Vec<Arc<dyn Statement>>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name = expr`.
    pub fn assign(self, name: &Name, expr: impl Into<Expr>) -> Self {
        self.statement(Assign::new(name, expr))
    }

    /// Append a branch that calls `body` with `args` when `cond` is `True`.
    pub fn if_(
        self,
        cond: impl Into<Expr>,
        body: impl Body + 'static,
        args: impl Into<Expr>,
    ) -> Self {
        self.statement(If {
            cond: cond.into(),
            body: Arc::new(body),
            args: args.into(),
        })
    }

    /// Append a branch that calls `body` with one of two argument sets.
    pub fn if_else(
        self,
        cond: impl Into<Expr>,
        body: impl Body + 'static,
        if_true: impl Into<Expr>,
        if_false: impl Into<Expr>,
    ) -> Self {
        self.statement(IfElse {
            cond: cond.into(),
            body: Arc::new(body),
            if_true: if_true.into(),
            if_false: if_false.into(),
        })
    }

    /// Append a loop. Returns an error if the loop builder fails validation.
    pub fn do_while(self, builder: LoopBuilder) -> Result<Self, BuildError> {
        let looped = builder.build()?;
        Ok(self.statement(looped))
    }

    /// Append any statement.
    pub fn statement(mut self, statement: impl Statement + 'static) -> Self {
        self.statements.push(Arc::new(statement));
        self
    }

    pub fn build(self) -> Result<Block, BuildError> {
        if self.statements.is_empty() {
            return Err(BuildError::EmptyBlock);
        }
        Ok(Block::new(self.statements))
    }
}
