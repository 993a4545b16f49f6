//! Expression evaluation and statement resolution.
//!
//! A [`Resolver`] owns the store and a depth guard. Statements are resolved
//! strictly in the order they are handed to it; every write a statement makes
//! is visible to everything resolved after it.
//!
//! # Example
//!
//! ```rust
//! use typevar::core::{Epoch, Name, Value};
//! use typevar::resolver::{Expr, Resolver};
//!
//! let mut rt = Resolver::new();
//! let epoch = Epoch::fresh();
//! let counter = Name::new("counter");
//!
//! rt.assign(&counter, 2u64, epoch);
//! let next = rt.eval(&Expr::add(&counter, 1u64), epoch).unwrap();
//! assert_eq!(next, Value::from(3u64));
//! ```

mod error;
mod expr;
mod limits;

pub use error::ResolveError;
pub use expr::{Deferred, Expr};
pub use limits::{DepthGuard, ResolveLimits, DEFAULT_MAX_DEPTH};

use crate::builder::Statement;
use crate::core::{Epoch, Name, Value};
use crate::store::Store;

/// Stack headroom required before a nested frame runs on the current segment.
const STACK_RED_ZONE: usize = 128 * 1024;

/// Size of each stack segment allocated once headroom runs out.
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

/// Single-threaded resolver over one store.
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    store: Store,
    guard: DepthGuard,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ResolveLimits) -> Self {
        Self {
            store: Store::new(),
            guard: DepthGuard::new(limits),
        }
    }

    /// Continue resolving against an existing store.
    pub fn from_store(store: Store, limits: ResolveLimits) -> Self {
        Self {
            store,
            guard: DepthGuard::new(limits),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }

    pub fn assign(&mut self, name: &Name, value: impl Into<Value>, epoch: Epoch) -> Epoch {
        self.store.assign(name, value, epoch)
    }

    pub fn value(&self, name: &Name, epoch: Epoch) -> Value {
        self.store.value(name, epoch)
    }

    /// Evaluate `expr` against the store as it is now.
    ///
    /// Binary operands are evaluated left to right.
    pub fn eval(&mut self, expr: &Expr, epoch: Epoch) -> Result<Value, ResolveError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Read(name) => Ok(self.store.value(name, epoch)),
            Expr::Unary(op, operand) => {
                let operand = self.eval(operand, epoch)?;
                Ok(op.apply(&self.store, &operand, epoch)?)
            }
            Expr::Binary(op, lhs, rhs) => {
                let lhs = self.eval(lhs, epoch)?;
                let rhs = self.eval(rhs, epoch)?;
                Ok(op.apply(&self.store, &lhs, &rhs, epoch)?)
            }
            Expr::Deferred(deferred) => {
                self.enter()?;
                let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
                    deferred.force(self, epoch)
                });
                self.exit();
                result
            }
        }
    }

    /// Resolve one statement inside its own depth frame.
    ///
    /// Nested frames run on a grown stack when needed, so the depth limit is
    /// what ends runaway nesting.
    pub fn resolve(&mut self, statement: &dyn Statement, epoch: Epoch) -> Result<Value, ResolveError> {
        self.enter()?;
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
            statement.resolve(self, epoch)
        });
        self.exit();
        result
    }

    pub fn enter(&mut self) -> Result<usize, ResolveError> {
        self.guard.enter()
    }

    pub fn exit(&mut self) {
        self.guard.exit()
    }

    pub fn depth(&self) -> usize {
        self.guard.depth()
    }

    pub fn unwind_to(&mut self, depth: usize) {
        self.guard.unwind_to(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::NumeralError;
    use crate::ops::OperatorError;

    #[test]
    fn read_sees_writes_made_before_evaluation() {
        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        let a = Name::new("a");
        let expr = Expr::read(&a);

        assert_eq!(rt.eval(&expr, epoch).unwrap(), Value::None);
        rt.assign(&a, 4u64, epoch);
        assert_eq!(rt.eval(&expr, epoch).unwrap(), Value::from(4u64));
    }

    #[test]
    fn nested_operators_evaluate() {
        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        let n = Name::new("n");
        rt.assign(&n, 7u64, epoch);

        let odd = Expr::eq(Expr::remainder(&n, 2u64), 1u64);
        assert_eq!(rt.eval(&odd, epoch).unwrap(), Value::True);

        let next = Expr::succ(Expr::mult(&n, 3u64));
        assert_eq!(rt.eval(&next, epoch).unwrap(), Value::from(22u64));
    }

    #[test]
    fn deferred_runs_only_when_forced() {
        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        let touched = Name::new("touched");
        let target = touched.clone();

        let expr = Expr::deferred(move |rt, epoch| {
            rt.assign(&target, Value::True, epoch);
            Ok(Value::from(1u64))
        });
        assert_eq!(rt.value(&touched, epoch), Value::None);

        assert_eq!(rt.eval(&expr, epoch).unwrap(), Value::from(1u64));
        assert_eq!(rt.value(&touched, epoch), Value::True);
        assert_eq!(rt.depth(), 0);
    }

    #[test]
    fn operator_failures_convert_into_resolve_errors() {
        let mut rt = Resolver::new();
        let result = rt.eval(&Expr::divide(3u64, 0u64), Epoch::fresh());
        assert_eq!(
            result,
            Err(ResolveError::Operator(OperatorError::Numeral(
                NumeralError::DivisionByZero
            )))
        );
    }

    #[test]
    fn runaway_deferred_recursion_hits_the_ceiling() {
        fn recurse() -> Expr {
            Expr::deferred(|rt, epoch| rt.eval(&recurse(), epoch))
        }

        let mut rt = Resolver::with_limits(ResolveLimits::new(8));
        let result = rt.eval(&recurse(), Epoch::fresh());

        assert_eq!(result, Err(ResolveError::DepthLimitExceeded { limit: 8 }));
        assert_eq!(rt.depth(), 0);
    }

    #[test]
    fn runaway_deferred_recursion_stops_at_the_default_ceiling() {
        fn recurse() -> Expr {
            Expr::deferred(|rt, epoch| rt.eval(&recurse(), epoch))
        }

        let mut rt = Resolver::new();
        let result = rt.eval(&recurse(), Epoch::fresh());

        assert_eq!(
            result,
            Err(ResolveError::DepthLimitExceeded {
                limit: DEFAULT_MAX_DEPTH
            })
        );
        assert_eq!(rt.depth(), 0);
    }

    #[test]
    fn deeply_nested_blocks_stop_at_the_default_ceiling() {
        use crate::builder::{Block, BlockBuilder};

        let a = Name::new("a");
        let mut block: Block = BlockBuilder::new().assign(&a, 0u64).build().unwrap();
        for _ in 0..DEFAULT_MAX_DEPTH + 16 {
            block = BlockBuilder::new().statement(block).build().unwrap();
        }

        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        let result = rt.resolve(&block, epoch);

        assert_eq!(
            result,
            Err(ResolveError::DepthLimitExceeded {
                limit: DEFAULT_MAX_DEPTH
            })
        );
        assert!(!rt.store().is_assigned(&a, epoch));
        assert_eq!(rt.depth(), 0);
    }

    #[test]
    fn from_store_keeps_existing_entries() {
        let mut store = Store::new();
        let epoch = Epoch::fresh();
        let a = Name::new("a");
        store.assign(&a, Value::tag("kept"), epoch);

        let rt = Resolver::from_store(store, ResolveLimits::default());
        assert_eq!(rt.value(&a, epoch), Value::tag("kept"));
        assert_eq!(rt.into_store().len(), 1);
    }
}
