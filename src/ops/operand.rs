//! Operand dispatch: literal or variable.

use super::error::OperatorError;
use crate::core::{Epoch, Name, Value};
use crate::numeral::Numeral;
use crate::store::Store;

/// An operator argument before it is resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// Used as-is.
    Literal(Value),
    /// Read from the store first.
    Variable(Name),
}

impl Operand {
    /// Decide whether `value` is a literal or a name that must be read.
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Name(name) => Self::Variable(name.clone()),
            other => Self::Literal(other.clone()),
        }
    }

    /// The operand's current value in `epoch`.
    pub fn resolve(self, store: &Store, epoch: Epoch) -> Value {
        match self {
            Self::Literal(value) => value,
            Self::Variable(name) => store.value(&name, epoch),
        }
    }
}

pub(crate) fn resolve(store: &Store, value: &Value, epoch: Epoch) -> Value {
    Operand::classify(value).resolve(store, epoch)
}

pub(crate) fn numeral(
    op: &'static str,
    store: &Store,
    value: &Value,
    epoch: Epoch,
) -> Result<Numeral, OperatorError> {
    let resolved = resolve(store, value, epoch);
    resolved
        .as_numeral()
        .ok_or(OperatorError::NotANumeral { op, found: resolved })
}

pub(crate) fn boolean(
    op: &'static str,
    store: &Store,
    value: &Value,
    epoch: Epoch,
) -> Result<Value, OperatorError> {
    let resolved = resolve(store, value, epoch);
    if resolved.is_boolean() {
        Ok(resolved)
    } else {
        Err(OperatorError::NotABoolean { op, found: resolved })
    }
}
