//! Branches and loops over the store.
//!
//! Every combinator takes a [`Body`] and hands it unevaluated arguments. The
//! body forces them only when it runs, which keeps untaken branches free of
//! side effects.

mod body;
mod conditional;
mod do_while;

pub use body::{from_fn, Assignment, Body, Delayed, FnBody};
pub use conditional::{if_, if_else};
pub use do_while::{DoWhile, LoopOutcome, LoopState};
