//! Typevar: reassignable variables, branches and loops over an append-only store
//!
//! Typevar models imperative programs as statements resolved one after
//! another against a store that never forgets. An assignment appends a new
//! entry for `(name, epoch)`; a read sees the newest one, or `None` when the
//! name was never written. Branches and do-while loops are built on those two
//! primitives, and operators accept either literals or variable names.
//!
//! # Core Concepts
//!
//! - **Store**: Append-only log of assignments keyed by name and epoch
//! - **Resolver**: Evaluates expressions and resolves statements in order
//! - **Control**: `if_`, `if_else` and `DoWhile` over any `Body`
//! - **Builder**: Fluent construction of blocks and loops
//!
//! # Example
//!
//! ```rust
//! use typevar::builder::{BlockBuilder, LoopBuilder};
//! use typevar::core::{Epoch, Value};
//! use typevar::names;
//! use typevar::resolver::{Expr, Resolver};
//!
//! names!(accumulator, counter, more);
//!
//! let body = BlockBuilder::new()
//!     .assign(&counter, Expr::add(&counter, 1u64))
//!     .assign(&accumulator, Expr::add(&accumulator, &counter))
//!     .assign(&more, Expr::leq(&counter, 5u64))
//!     .build()
//!     .unwrap();
//!
//! let program = BlockBuilder::new()
//!     .assign(&accumulator, 0u64)
//!     .assign(&counter, 0u64)
//!     .assign(&more, Value::True)
//!     .do_while(LoopBuilder::new().body(body).until_false(&more))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let mut rt = Resolver::new();
//! let epoch = Epoch::fresh();
//! program.run(&mut rt, epoch).unwrap();
//!
//! assert_eq!(rt.value(&accumulator, epoch), Value::from(21u64));
//! ```

pub mod builder;
pub mod control;
pub mod core;
pub mod numeral;
pub mod ops;
pub mod resolver;
pub mod store;

// Re-export commonly used types
pub use builder::{Block, BlockBuilder, LoopBuilder, Statement};
pub use control::{if_, if_else, Body, DoWhile};
pub use crate::core::{Epoch, Name, Value};
pub use numeral::Numeral;
pub use resolver::{Expr, ResolveError, ResolveLimits, Resolver};
pub use store::Store;
