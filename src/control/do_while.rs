//! Repeat-until-false loop.

use super::body::Body;
use crate::core::{Epoch, Name, Value};
use crate::numeral::Numeral;
use crate::resolver::{Expr, ResolveError, Resolver};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Where a loop stands between iterations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopState {
    /// The body will run next with this zero-based iteration index.
    Running(usize),
    /// Absorbing; the body never runs again.
    Terminated,
}

impl LoopState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}

/// Result of running a loop to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopOutcome {
    /// How many times the body ran. Always at least one.
    pub iterations: usize,
}

/// Runs `body` at least once, then again for as long as `stop` reads `True`.
///
/// The flag is read after every body execution, in the loop's epoch. The
/// body receives the iteration index as a numeral literal.
///
/// # Example
///
/// ```rust
/// use typevar::control::{from_fn, DoWhile};
/// use typevar::core::{Epoch, Name, Value};
/// use typevar::resolver::{Expr, Resolver};
///
/// let mut rt = Resolver::new();
/// let epoch = Epoch::fresh();
/// let counter = Name::new("counter");
/// let more = Name::new("more");
/// rt.assign(&counter, 0u64, epoch);
///
/// let (c, m) = (counter.clone(), more.clone());
/// let body = from_fn(move |rt, _, epoch| {
///     let next = rt.eval(&Expr::succ(&c), epoch)?;
///     rt.assign(&c, next, epoch);
///     let again = rt.eval(&Expr::leq(&c, 3u64), epoch)?;
///     rt.assign(&m, again, epoch);
///     Ok(Value::None)
/// });
///
/// let outcome = DoWhile::new(body, more).run(&mut rt, epoch).unwrap();
/// assert_eq!(outcome.iterations, 4);
/// assert_eq!(rt.value(&counter, epoch), Value::from(4u64));
/// ```
#[derive(Clone, Debug)]
pub struct DoWhile<B> {
    body: B,
    stop: Name,
}

impl<B: Body> DoWhile<B> {
    pub fn new(body: B, stop: Name) -> Self {
        Self { body, stop }
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn stop_flag(&self) -> &Name {
        &self.stop
    }

    /// Advance one iteration from `state`.
    ///
    /// Enters a depth frame that stays entered; [`DoWhile::run`] unwinds
    /// them when the loop ends. Callers driving `step` by hand should do the
    /// same with [`Resolver::unwind_to`].
    pub fn step(
        &self,
        rt: &mut Resolver,
        state: LoopState,
        epoch: Epoch,
    ) -> Result<LoopState, ResolveError> {
        let LoopState::Running(index) = state else {
            return Ok(LoopState::Terminated);
        };

        rt.enter()?;
        let args = Expr::lit(Numeral::new(index as u64));
        self.body.call(rt, &args, epoch)?;

        match rt.value(&self.stop, epoch) {
            Value::True => {
                trace!(stop = %self.stop, index, "loop continues");
                Ok(LoopState::Running(index + 1))
            }
            Value::False => Ok(LoopState::Terminated),
            found => Err(ResolveError::IllFormedCondition { found }),
        }
    }

    /// Run until the stop flag reads `False`.
    pub fn run(&self, rt: &mut Resolver, epoch: Epoch) -> Result<LoopOutcome, ResolveError> {
        let base = rt.depth();
        let result = self.drive(rt, epoch);
        rt.unwind_to(base);

        if let Ok(outcome) = &result {
            debug!(stop = %self.stop, iterations = outcome.iterations, "loop terminated");
        }
        result
    }

    fn drive(&self, rt: &mut Resolver, epoch: Epoch) -> Result<LoopOutcome, ResolveError> {
        let mut state = LoopState::Running(0);
        let mut iterations = 0;
        while let LoopState::Running(index) = state {
            state = self.step(rt, state, epoch)?;
            iterations = index + 1;
        }
        Ok(LoopOutcome { iterations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::from_fn;
    use crate::resolver::ResolveLimits;
    use std::sync::{Arc, Mutex};

    #[test]
    fn body_runs_once_even_when_flag_starts_false() {
        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        let counter = Name::new("counter");
        let stop = Name::new("stop");
        rt.assign(&counter, 0u64, epoch);
        rt.assign(&stop, Value::False, epoch);

        let c = counter.clone();
        let body = from_fn(move |rt, _, epoch| {
            let next = rt.eval(&Expr::succ(&c), epoch)?;
            rt.assign(&c, next, epoch);
            Ok(Value::None)
        });

        let outcome = DoWhile::new(body, stop).run(&mut rt, epoch).unwrap();
        assert_eq!(outcome.iterations, 1);
        assert_eq!(rt.value(&counter, epoch), Value::from(1u64));
    }

    #[test]
    fn body_receives_iteration_indices() {
        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        let stop = Name::new("stop");
        let seen = Arc::new(Mutex::new(Vec::new()));

        let (log, flag) = (Arc::clone(&seen), stop.clone());
        let body = from_fn(move |rt, args, epoch| {
            let index = rt.eval(args, epoch)?;
            let more = rt.eval(&Expr::leq(index.clone(), 1u64), epoch)?;
            rt.assign(&flag, more, epoch);
            if let Ok(mut log) = log.lock() {
                log.push(index);
            }
            Ok(Value::None)
        });

        DoWhile::new(body, stop).run(&mut rt, epoch).unwrap();
        let seen = seen.lock().unwrap().clone();
        assert_eq!(seen, vec![Value::from(0u64), Value::from(1u64), Value::from(2u64)]);
    }

    #[test]
    fn stepping_by_hand_walks_the_state_machine() {
        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        let stop = Name::new("stop");
        rt.assign(&stop, Value::True, epoch);

        let flag = stop.clone();
        let body = from_fn(move |rt, args, epoch| {
            if rt.eval(args, epoch)? == Value::from(1u64) {
                rt.assign(&flag, Value::False, epoch);
            }
            Ok(Value::None)
        });
        let looped = DoWhile::new(body, stop);

        let state = looped.step(&mut rt, LoopState::Running(0), epoch).unwrap();
        assert_eq!(state, LoopState::Running(1));
        let state = looped.step(&mut rt, state, epoch).unwrap();
        assert!(state.is_terminated());
        assert_eq!(looped.step(&mut rt, state, epoch).unwrap(), LoopState::Terminated);
        assert_eq!(rt.depth(), 2);

        rt.unwind_to(0);
        assert_eq!(rt.depth(), 0);
    }

    #[test]
    fn flag_that_never_clears_hits_the_depth_ceiling() {
        let mut rt = Resolver::with_limits(ResolveLimits::new(32));
        let epoch = Epoch::fresh();
        let stop = Name::new("stop");
        let flag = stop.clone();
        let body = from_fn(move |rt, _, epoch| {
            rt.assign(&flag, Value::True, epoch);
            Ok(Value::None)
        });

        let result = DoWhile::new(body, stop.clone()).run(&mut rt, epoch);

        assert_eq!(result, Err(ResolveError::DepthLimitExceeded { limit: 32 }));
        assert_eq!(rt.store().next_index(&stop, epoch), 32);
        assert_eq!(rt.depth(), 0);
    }

    #[test]
    fn non_boolean_flag_is_ill_formed() {
        let mut rt = Resolver::new();
        let epoch = Epoch::fresh();
        let stop = Name::new("stop");
        let body = from_fn(|_, _, _| Ok(Value::None));

        let result = DoWhile::new(body, stop).run(&mut rt, epoch);
        assert_eq!(
            result,
            Err(ResolveError::IllFormedCondition { found: Value::None })
        );
    }
}
