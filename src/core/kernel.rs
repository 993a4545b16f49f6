//! Identity, base-relation and sentinel logic.
//!
//! Every query answers with a boolean sentinel rather than a Rust `bool`,
//! so its result can be stored in a variable or fed to a conditional as-is.

use super::value::{Kind, Value};
use thiserror::Error;

/// Raised when sentinel logic receives something other than `True`/`False`.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("expected a boolean sentinel, found {found}")]
pub struct NotABoolean {
    pub found: Value,
}

/// Structural identity of two descriptors.
///
/// ```rust
/// use typevar::core::{is_same, Value};
///
/// assert_eq!(is_same(&Value::from(2u64), &Value::from(2u64)), Value::True);
/// assert_eq!(is_same(&Value::True, &Value::None), Value::False);
/// ```
pub fn is_same(lhs: &Value, rhs: &Value) -> Value {
    Value::from(lhs == rhs)
}

/// Whether `value` is tagged as belonging to `base`.
pub fn is_base_of(base: Kind, value: &Value) -> Value {
    Value::from(value.kind() == base)
}

pub fn is_boolean(value: &Value) -> Value {
    is_base_of(Kind::Boolean, value)
}

pub fn to_bool(value: &Value) -> Option<bool> {
    value.to_bool()
}

fn sentinel(value: &Value) -> Result<bool, NotABoolean> {
    value.to_bool().ok_or_else(|| NotABoolean {
        found: value.clone(),
    })
}

pub fn not(value: &Value) -> Result<Value, NotABoolean> {
    Ok(Value::from(!sentinel(value)?))
}

pub fn and(lhs: &Value, rhs: &Value) -> Result<Value, NotABoolean> {
    Ok(Value::from(sentinel(lhs)? && sentinel(rhs)?))
}

pub fn or(lhs: &Value, rhs: &Value) -> Result<Value, NotABoolean> {
    Ok(Value::from(sentinel(lhs)? || sentinel(rhs)?))
}

pub fn xor(lhs: &Value, rhs: &Value) -> Result<Value, NotABoolean> {
    Ok(Value::from(sentinel(lhs)? ^ sentinel(rhs)?))
}
