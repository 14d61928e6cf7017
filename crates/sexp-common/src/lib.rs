//! # S-expression Common Types
//!
//! The node substrate shared by every S-expression algorithm: an immutable,
//! reference-counted binary tree of three node kinds.
//!
//! ## Modules
//!
//! - [`node`]: The [`SExp`] enum (`Empty`, `Symbol`, `Pair`) with its constructors,
//!   predicates and accessors
//! - [`list`]: Builders for proper lists and Scheme-style `cons`/`car`/`cdr` helpers
//! - [`error`]: Typed failures for callers that hand over the wrong shape
//!
//! ## Design Principles
//!
//! 1. **Persistent**: Nodes are never mutated; new trees share unchanged subtrees
//! 2. **Exhaustive**: The three-way shape is a sum type, so every consumer `match`es
//!    every variant
//! 3. **Thread-safe**: Subtrees are shared through `Arc`, so trees are `Send + Sync`
//! 4. **Panic-free accessors**: `first`/`rest` return `Option` instead of failing
//!    on atoms

pub mod error;
pub mod list;
pub mod node;

// Re-export main types for convenience
pub use error::{Malformation, SExpError, SExpResult};
pub use list::list;
pub use node::{sym, SExp, Symbol};
