//! Store entries and write descriptors.

use crate::core::{Epoch, Name, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a write descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WriteId(Uuid);

impl WriteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WriteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// A write descriptor: "assign `value` to `name`".
///
/// Registering the same descriptor twice in one epoch occupies a single
/// slot. Two descriptors built separately are distinct writes, even when
/// they assign the same value to the same name.
///
/// # Example
///
/// ```rust
/// use typevar::core::{Epoch, Name, Value};
/// use typevar::store::{Store, Write};
///
/// let mut store = Store::new();
/// let epoch = Epoch::fresh();
/// let a = Name::new("a");
///
/// let write = Write::new(a.clone(), Value::tag("int"));
/// assert_eq!(store.register(&write, epoch), 0);
/// assert_eq!(store.register(&write, epoch), 0);
/// assert_eq!(store.entries(&a, epoch).len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Write {
    id: WriteId,
    name: Name,
    value: Value,
}

impl Write {
    pub fn new(name: Name, value: impl Into<Value>) -> Self {
        Self {
            id: WriteId::new(),
            name,
            value: value.into(),
        }
    }

    pub fn id(&self) -> WriteId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// One registered `(name, epoch, index) -> value` association.
///
/// Entries are immutable once created; reassignment appends a new entry
/// with a higher index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreEntry {
    /// The variable written to
    pub name: Name,
    /// The namespace the write belongs to
    pub epoch: Epoch,
    /// Sequence index within `(name, epoch)`, starting at 0
    pub index: usize,
    /// Position among all writes in the store
    pub ordinal: usize,
    /// The descriptor that produced this entry
    pub write: WriteId,
    /// The stored value
    pub value: Value,
}
