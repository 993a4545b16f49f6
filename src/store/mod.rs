//! Append-only variable store.
//!
//! The store is a log keyed by `(name, epoch)`. Every write appends an entry
//! at the next free sequence index; a read returns the value at the highest
//! index, or `None` when the name was never written in that epoch. Nothing
//! is ever overwritten or removed.

mod entry;
pub mod error;
mod snapshot;

pub use entry::{StoreEntry, Write, WriteId};
pub use error::SnapshotError;
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};

use crate::core::{Epoch, Name, Value};
use std::collections::HashMap;
use tracing::{debug, trace};

/// The stateful variable store.
///
/// # Example
///
/// ```rust
/// use typevar::core::{Epoch, Name, Value};
/// use typevar::store::Store;
///
/// let mut store = Store::new();
/// let epoch = Epoch::fresh();
/// let a = Name::new("a");
///
/// assert_eq!(store.value(&a, epoch), Value::None);
///
/// let epoch = store.assign(&a, Value::tag("int"), epoch);
/// let epoch = store.assign(&a, Value::tag("float"), epoch);
///
/// assert_eq!(store.value(&a, epoch), Value::tag("float"));
/// assert_eq!(store.history(&a, epoch).len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Store {
    slots: HashMap<(Name, Epoch), Vec<StoreEntry>>,
    registered: HashMap<(WriteId, Epoch), usize>,
    len: usize,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a write descriptor in `epoch`, returning its sequence index.
    ///
    /// A descriptor that is already registered in `epoch` keeps the slot it
    /// occupies and nothing is appended.
    pub fn register(&mut self, write: &Write, epoch: Epoch) -> usize {
        if let Some(&index) = self.registered.get(&(write.id(), epoch)) {
            trace!(name = %write.name(), %epoch, index, "write already registered");
            return index;
        }

        let entries = self
            .slots
            .entry((write.name().clone(), epoch))
            .or_default();
        let index = entries.len();
        entries.push(StoreEntry {
            name: write.name().clone(),
            epoch,
            index,
            ordinal: self.len,
            write: write.id(),
            value: write.value().clone(),
        });
        self.registered.insert((write.id(), epoch), index);
        self.len += 1;

        debug!(name = %write.name(), %epoch, index, value = %write.value(), "assigned");
        index
    }

    /// Assign `value` to `name` with a fresh write descriptor.
    ///
    /// Returns the epoch so assignments can be chained.
    pub fn assign(&mut self, name: &Name, value: impl Into<Value>, epoch: Epoch) -> Epoch {
        let write = Write::new(name.clone(), value);
        self.register(&write, epoch);
        epoch
    }

    /// The most recent value assigned to `name` in `epoch`, or `None`.
    pub fn value(&self, name: &Name, epoch: Epoch) -> Value {
        let value = self
            .entries(name, epoch)
            .last()
            .map(|entry| entry.value.clone())
            .unwrap_or_default();
        trace!(%name, %epoch, %value, "read");
        value
    }

    /// Read through a descriptor, performing exactly one indirection.
    ///
    /// A `Value::Name` is looked up; any other descriptor was never a
    /// registered name and reads as `None`.
    pub fn read(&self, descriptor: &Value, epoch: Epoch) -> Value {
        match descriptor {
            Value::Name(name) => self.value(name, epoch),
            _ => Value::None,
        }
    }

    /// All entries for `name` in `epoch`, in index order.
    pub fn entries(&self, name: &Name, epoch: Epoch) -> &[StoreEntry] {
        self.slots
            .get(&(name.clone(), epoch))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The values `name` held in `epoch`, oldest first.
    pub fn history(&self, name: &Name, epoch: Epoch) -> Vec<&Value> {
        self.entries(name, epoch)
            .iter()
            .map(|entry| &entry.value)
            .collect()
    }

    /// The index the next write to `name` in `epoch` will occupy.
    pub fn next_index(&self, name: &Name, epoch: Epoch) -> usize {
        self.entries(name, epoch).len()
    }

    /// Whether `name` was ever assigned in `epoch`.
    pub fn is_assigned(&self, name: &Name, epoch: Epoch) -> bool {
        !self.entries(name, epoch).is_empty()
    }

    /// Total number of entries across all names and epochs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capture every entry, in registration order.
    pub fn snapshot(&self) -> Snapshot {
        let mut entries: Vec<StoreEntry> = self.slots.values().flatten().cloned().collect();
        entries.sort_by_key(|entry| entry.ordinal);
        Snapshot::new(entries)
    }

    /// Rebuild a store from a snapshot.
    pub fn restore(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;

        let mut entries = snapshot.entries;
        entries.sort_by_key(|entry| entry.ordinal);

        let mut store = Self::new();
        for mut entry in entries {
            let key = (entry.name.clone(), entry.epoch);
            let slot = store.slots.entry(key).or_default();
            if entry.index != slot.len() {
                return Err(SnapshotError::IndexGap {
                    name: entry.name.label().to_string(),
                    epoch: entry.epoch,
                    index: entry.index,
                    expected: slot.len(),
                });
            }
            entry.ordinal = store.len;
            store.registered.insert((entry.write, entry.epoch), entry.index);
            slot.push(entry);
            store.len += 1;
        }

        debug!(entries = store.len, "restored store from snapshot");
        Ok(store)
    }
}
