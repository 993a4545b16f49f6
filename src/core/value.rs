//! The descriptor type held by variables.

use super::name::Name;
use crate::numeral::Numeral;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A descriptor that can be stored under a variable name.
///
/// Values carry no constraints on shape: a variable may hold a numeral, a
/// boolean sentinel, another variable's name, an opaque tag or a pack of
/// any of these.
///
/// # Example
///
/// ```rust
/// use typevar::core::{Kind, Value};
/// use typevar::numeral::Numeral;
///
/// let five = Value::from(Numeral::new(5));
/// assert_eq!(five.kind(), Kind::Numeral);
/// assert!(Value::from(true).is_boolean());
/// assert_eq!(Value::default(), Value::None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// The value of a variable that was never assigned.
    #[default]
    None,
    /// Boolean sentinel `True`.
    True,
    /// Boolean sentinel `False`.
    False,
    /// A non-negative integer.
    Numeral(Numeral),
    /// A variable name stored as a value; reading through it is explicit.
    Name(Name),
    /// An arbitrary opaque descriptor, compared by its text.
    Tag(String),
    /// An ordered pack of descriptors.
    Pack(Vec<Value>),
}

/// Tag identifying which family a [`Value`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    None,
    Boolean,
    Numeral,
    Name,
    Tag,
    Pack,
}

impl Kind {
    /// Get the kind's name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Boolean => "Boolean",
            Self::Numeral => "Numeral",
            Self::Name => "Name",
            Self::Tag => "Tag",
            Self::Pack => "Pack",
        }
    }
}

impl Value {
    /// Build an opaque tag descriptor.
    pub fn tag(text: impl Into<String>) -> Self {
        Self::Tag(text.into())
    }

    /// Build a pack from any sequence of values.
    pub fn pack<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Pack(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::None => Kind::None,
            Self::True | Self::False => Kind::Boolean,
            Self::Numeral(_) => Kind::Numeral,
            Self::Name(_) => Kind::Name,
            Self::Tag(_) => Kind::Tag,
            Self::Pack(_) => Kind::Pack,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    pub fn is_numeral(&self) -> bool {
        matches!(self, Self::Numeral(_))
    }

    /// Interpret a boolean sentinel. Any other descriptor yields `None`.
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            _ => None,
        }
    }

    pub fn as_numeral(&self) -> Option<Numeral> {
        match self {
            Self::Numeral(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_pack(&self) -> Option<&[Value]> {
        match self {
            Self::Pack(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<Numeral> for Value {
    fn from(value: Numeral) -> Self {
        Self::Numeral(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Numeral(Numeral::new(value))
    }
}

impl From<Name> for Value {
    fn from(value: Name) -> Self {
        Self::Name(value)
    }
}

impl From<&Name> for Value {
    fn from(value: &Name) -> Self {
        Self::Name(value.clone())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::True => f.write_str("True"),
            Self::False => f.write_str("False"),
            Self::Numeral(n) => write!(f, "{n}"),
            Self::Name(name) => write!(f, "{name}"),
            Self::Tag(text) => write!(f, "`{text}`"),
            Self::Pack(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}
