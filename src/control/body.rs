//! Callables that branches and loops resolve.

use crate::core::{Epoch, Name, Value};
use crate::resolver::{Expr, ResolveError, Resolver};
use std::sync::Arc;
use tracing::trace;

/// Something that can be called with explicit arguments in an epoch.
///
/// Arguments arrive unevaluated; a body decides whether and when to force
/// them.
pub trait Body: Send + Sync {
    fn call(&self, rt: &mut Resolver, args: &Expr, epoch: Epoch) -> Result<Value, ResolveError>;
}

/// A closure used as a body. Build one with [`from_fn`].
#[derive(Clone)]
pub struct FnBody<F>(F);

/// Wrap a closure as a [`Body`].
///
/// # Example
///
/// ```rust
/// use typevar::control::{from_fn, Body};
/// use typevar::core::{Epoch, Value};
/// use typevar::resolver::{Expr, Resolver};
///
/// let double = from_fn(|rt, args, epoch| rt.eval(&Expr::mult(args.clone(), 2u64), epoch));
/// let mut rt = Resolver::new();
/// let out = double.call(&mut rt, &Expr::lit(4u64), Epoch::fresh()).unwrap();
/// assert_eq!(out, Value::from(8u64));
/// ```
pub fn from_fn<F>(f: F) -> FnBody<F>
where
    F: Fn(&mut Resolver, &Expr, Epoch) -> Result<Value, ResolveError> + Send + Sync,
{
    FnBody(f)
}

impl<F> Body for FnBody<F>
where
    F: Fn(&mut Resolver, &Expr, Epoch) -> Result<Value, ResolveError> + Send + Sync,
{
    fn call(&self, rt: &mut Resolver, args: &Expr, epoch: Epoch) -> Result<Value, ResolveError> {
        (self.0)(rt, args, epoch)
    }
}

/// The store's write primitive as a body: evaluates its arguments and
/// assigns the result to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    target: Name,
}

impl Assignment {
    pub fn new(target: &Name) -> Self {
        Self {
            target: target.clone(),
        }
    }

    pub fn target(&self) -> &Name {
        &self.target
    }
}

impl Body for Assignment {
    fn call(&self, rt: &mut Resolver, args: &Expr, epoch: Epoch) -> Result<Value, ResolveError> {
        let value = rt.eval(args, epoch)?;
        rt.assign(&self.target, value.clone(), epoch);
        Ok(value)
    }
}

/// Builds the wrapped body only when called.
pub struct Delayed<F> {
    factory: F,
}

impl<F> Delayed<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, B> Body for Delayed<F>
where
    F: Fn() -> B + Send + Sync,
    B: Body,
{
    fn call(&self, rt: &mut Resolver, args: &Expr, epoch: Epoch) -> Result<Value, ResolveError> {
        trace!(%epoch, "constructing delayed body");
        (self.factory)().call(rt, args, epoch)
    }
}

impl<B: Body + ?Sized> Body for &B {
    fn call(&self, rt: &mut Resolver, args: &Expr, epoch: Epoch) -> Result<Value, ResolveError> {
        (**self).call(rt, args, epoch)
    }
}

impl<B: Body + ?Sized> Body for Box<B> {
    fn call(&self, rt: &mut Resolver, args: &Expr, epoch: Epoch) -> Result<Value, ResolveError> {
        (**self).call(rt, args, epoch)
    }
}

impl<B: Body + ?Sized> Body for Arc<B> {
    fn call(&self, rt: &mut Resolver, args: &Expr, epoch: Epoch) -> Result<Value, ResolveError> {
        (**self).call(rt, args, epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn assignment_writes_evaluated_arguments() {
        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        let a = Name::new("a");

        let written = Assignment::new(&a)
            .call(&mut rt, &Expr::add(2u64, 3u64), epoch)
            .unwrap();

        assert_eq!(written, Value::from(5u64));
        assert_eq!(rt.value(&a, epoch), Value::from(5u64));
    }

    #[test]
    fn each_call_is_a_new_write() {
        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        let a = Name::new("a");
        let body = Assignment::new(&a);

        body.call(&mut rt, &Expr::lit(Value::True), epoch).unwrap();
        body.call(&mut rt, &Expr::lit(Value::True), epoch).unwrap();

        assert_eq!(rt.store().next_index(&a, epoch), 2);
    }

    #[test]
    fn delayed_constructs_on_every_call_and_not_before() {
        static BUILT: AtomicUsize = AtomicUsize::new(0);
        let a = Name::new("a");
        let target = a.clone();

        let delayed = Delayed::new(move || {
            BUILT.fetch_add(1, Ordering::SeqCst);
            Assignment::new(&target)
        });
        assert_eq!(BUILT.load(Ordering::SeqCst), 0);

        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        delayed.call(&mut rt, &Expr::lit(1u64), epoch).unwrap();
        delayed.call(&mut rt, &Expr::lit(2u64), epoch).unwrap();

        assert_eq!(BUILT.load(Ordering::SeqCst), 2);
        assert_eq!(rt.value(&a, epoch), Value::from(2u64));
    }

    #[test]
    fn shared_and_boxed_bodies_forward() {
        let a = Name::new("a");
        let shared: Arc<dyn Body> = Arc::new(Assignment::new(&a));
        let boxed: Box<dyn Body> = Box::new(Assignment::new(&a));

        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        shared.call(&mut rt, &Expr::lit(1u64), epoch).unwrap();
        boxed.call(&mut rt, &Expr::lit(2u64), epoch).unwrap();
        assert_eq!(rt.value(&a, epoch), Value::from(2u64));

        fn call_by_ref<B: Body>(body: B, rt: &mut Resolver, epoch: Epoch) {
            body.call(rt, &Expr::lit(3u64), epoch).unwrap();
        }
        call_by_ref(&shared, &mut rt, epoch);

        assert_eq!(rt.value(&a, epoch), Value::from(3u64));
    }
}
