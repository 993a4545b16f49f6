//! Builder API for programs over the store.
//!
//! This module provides statements, fluent builders for blocks and loops, and
//! the `names!` macro for declaring variables.

pub mod error;
pub mod macros;

mod block;
mod looping;
mod statement;

pub use block::{Block, BlockBuilder};
pub use error::BuildError;
pub use looping::LoopBuilder;
pub use statement::{Assign, If, IfElse, Loop, Statement};
