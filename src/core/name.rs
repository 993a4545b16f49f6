//! Variable names and evaluation epochs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A variable name: a unique descriptor used purely as a lookup key.
///
/// Every call to [`Name::new`] produces a distinct name, even when the
/// labels are equal. Names compare by identity; the label is only used for
/// display.
///
/// # Example
///
/// ```rust
/// use typevar::core::Name;
///
/// let a = Name::new("a");
/// let other_a = Name::new("a");
/// assert_eq!(a, a.clone());
/// assert_ne!(a, other_a);
/// assert_eq!(a.label(), "a");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Name {
    id: Uuid,
    label: String,
}

impl Name {
    /// Declare a fresh variable name.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Scoping token for one coherent sequence of writes and reads.
///
/// All reads and writes made with the same epoch share a store namespace.
/// A fresh epoch starts from an empty namespace without tearing anything
/// down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Epoch(Uuid);

impl Epoch {
    /// Create a globally unique epoch.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for Epoch {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "epoch:{}", self.0.simple())
    }
}
