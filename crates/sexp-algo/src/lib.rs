//! # S-expression Algorithms
//!
//! Measurement, comparison, transformation, lookup and printing over the
//! [`SExp`](sexp_common::SExp) trees of `sexp-common`.
//!
//! ## Modules
//!
//! - [`traversal`]: Non-recursive preorder walk over nodes and atoms, and a cursor over list elements
//! - [`measure`]: `length` (symbol count) and `height`
//! - [`transform`]: `equal`, `replace`, `concat`, `reverse`, `flatten`, `map_list`
//! - [`lookup`]: Association-list lookup with shape validation, plus a persistent index
//! - [`notation`]: Parenthesized list notation printer
//!
//! ## Example
//!
//! ```
//! use sexp_algo::{concat, flatten, length, reverse, Notation};
//! use sexp_common::{list, sexp_list};
//!
//! let x = sexp_list!["a", sexp_list!["b", "c"]];
//! assert_eq!(length(&x), 3);
//! assert_eq!(flatten(&x).to_notation(), "(a b c)");
//! assert_eq!(reverse(&x)?.to_notation(), "((b c) a)");
//! assert_eq!(concat(&x, &list(["d"]))?.to_notation(), "(a (b c) d)");
//! # Ok::<(), sexp_common::SExpError>(())
//! ```
//!
//! Every operation is a pure function: inputs are never modified and results
//! share unchanged subtrees with their inputs.

pub mod lookup;
pub mod measure;
pub mod notation;
pub mod transform;
pub mod traversal;

// Re-export main operations for convenience
pub use lookup::{lookup, lookup_many, AssocIndex};
pub use measure::{height, length};
pub use notation::{to_notation, Notation};
pub use transform::{concat, equal, flatten, map_list, replace, reverse, try_map_list};
pub use traversal::{atoms, elements, nodes, walk_preorder, Branch};
