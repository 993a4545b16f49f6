//! Branch combinators.
//!
//! The condition must already be one of the two boolean sentinels. Only the
//! chosen arguments are handed to the body, so the other branch is never
//! evaluated.

use super::body::Body;
use crate::core::{Epoch, Value};
use crate::resolver::{Expr, ResolveError, Resolver};
use tracing::debug;

fn condition(cond: &Value) -> Result<bool, ResolveError> {
    cond.to_bool()
        .ok_or_else(|| ResolveError::IllFormedCondition {
            found: cond.clone(),
        })
}

/// Call `body` with `args` when `cond` is `True`; yield `None` when `False`.
pub fn if_<B>(
    rt: &mut Resolver,
    cond: &Value,
    body: &B,
    args: &Expr,
    epoch: Epoch,
) -> Result<Value, ResolveError>
where
    B: Body + ?Sized,
{
    if condition(cond)? {
        debug!(%epoch, "if: branch taken");
        body.call(rt, args, epoch)
    } else {
        debug!(%epoch, "if: branch skipped");
        Ok(Value::None)
    }
}

/// Call `body` with exactly one of `if_true` or `if_false`.
pub fn if_else<B>(
    rt: &mut Resolver,
    cond: &Value,
    body: &B,
    if_true: &Expr,
    if_false: &Expr,
    epoch: Epoch,
) -> Result<Value, ResolveError>
where
    B: Body + ?Sized,
{
    let taken = condition(cond)?;
    debug!(%epoch, taken, "if_else: selecting branch");
    let args = if taken { if_true } else { if_false };
    body.call(rt, args, epoch)
}
