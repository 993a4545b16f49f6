//! Descriptor kernel shared by every other module.
//!
//! This module contains the building blocks the store and the control-flow
//! combinators operate on:
//! - `Value`, the closed set of descriptors a variable can hold
//! - `Name` and `Epoch`, the two keys of a store entry
//! - Identity and base-relation queries answered with boolean sentinels
//! - Sentinel logic and argument packs
//!
//! Nothing in this module touches the store.

mod kernel;
mod name;
mod pack;
mod value;

pub use kernel::{and, is_base_of, is_boolean, is_same, not, or, to_bool, xor, NotABoolean};
pub use name::{Epoch, Name};
pub use pack::{concat, first, last, tail};
pub use value::{Kind, Value};
