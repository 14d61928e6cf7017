//! # Non-recursive Traversal
//!
//! Two walkers over an S-expression, both driven by an explicit work stack or
//! cursor so tree height never touches the call stack:
//!
//! - [`Preorder`]: every node in the order a recursive "`first`, then `rest`"
//!   walk would reach it, tagged with the [`Branch`] it hangs from. Subtrees
//!   can be pruned as the walk goes. [`atoms`] and [`walk_preorder`] keep only
//!   the atomic nodes (`()` or a symbol).
//! - [`Spine`]: the top-level elements of a list, i.e. the `first` of every pair
//!   along the `rest` chain, followed by a check of the terminal tail.
//!
//! ## Example
//!
//! ```
//! use sexp_algo::traversal::{atoms, elements};
//! use sexp_common::{sexp_list, sym, SExp};
//!
//! let tree = sexp_list!["a", sexp_list!["b"], "c"];
//!
//! // (a (b) c) == (a . ((b . ()) . (c . ())))
//! let visited: Vec<&SExp> = atoms(&tree).collect();
//! assert_eq!(visited, [&sym("a"), &sym("b"), &SExp::empty(), &sym("c"), &SExp::empty()]);
//!
//! let top_level: Vec<&SExp> = elements(&tree).collect();
//! assert_eq!(top_level, [&sym("a"), &sexp_list!["b"], &sym("c")]);
//! ```

use sexp_common::{Malformation, SExp, SExpError, SExpResult};
use tracing::{debug, trace};

/// Which link of its parent a node was reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// The node the walk started from.
    Root,
    /// The `first` of a pair.
    First,
    /// The `rest` of a pair.
    Rest,
}

/// Preorder walk over every node of a tree, pairs included.
///
/// A pair's children are expanded lazily, when the walk advances past it:
/// `rest` is pushed and then `first`, so `first` is reached next. Calling
/// [`Preorder::prune`] right after a pair is yielded skips its subtree.
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    stack: Vec<(&'a SExp, Branch)>,
    expand: Option<&'a SExp>,
}

/// Starts a preorder walk over every node reachable from `root`.
#[must_use]
pub fn nodes(root: &SExp) -> Preorder<'_> {
    Preorder {
        stack: vec![(root, Branch::Root)],
        expand: None,
    }
}

impl Preorder<'_> {
    /// Skips the children of the node just yielded.
    pub fn prune(&mut self) {
        self.expand = None;
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (&'a SExp, Branch);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(SExp::Pair(first, rest)) = self.expand.take() {
            self.stack.push((rest.as_ref(), Branch::Rest));
            self.stack.push((first.as_ref(), Branch::First));
        }
        let (node, branch) = self.stack.pop()?;
        if node.is_pair() {
            self.expand = Some(node);
        }
        Some((node, branch))
    }
}

/// The atomic nodes of a [`Preorder`] walk.
#[derive(Debug, Clone)]
pub struct Atoms<'a> {
    walk: Preorder<'a>,
}

/// Starts a preorder walk over the atoms reachable from `root`.
#[must_use]
pub fn atoms(root: &SExp) -> Atoms<'_> {
    Atoms { walk: nodes(root) }
}

impl<'a> Iterator for Atoms<'a> {
    type Item = &'a SExp;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk
            .by_ref()
            .find_map(|(node, _)| node.is_atomic().then_some(node))
    }
}

/// Calls `visit` on every atomic node of `root` in preorder.
///
/// Returning `false` from `visit` stops the walk before any further callback.
/// The return value is `true` when the walk ran to completion.
///
/// ```
/// use sexp_algo::traversal::walk_preorder;
/// use sexp_common::{list, sym};
///
/// let mut seen = Vec::new();
/// let completed = walk_preorder(&list(["a", "b", "c"]), |atom| {
///     seen.push(atom.clone());
///     seen.len() < 2
/// });
/// assert!(!completed);
/// assert_eq!(seen, [sym("a"), sym("b")]);
/// ```
pub fn walk_preorder<F>(root: &SExp, mut visit: F) -> bool
where
    F: FnMut(&SExp) -> bool,
{
    for atom in atoms(root) {
        if !visit(atom) {
            trace!("preorder walk stopped by visitor");
            return false;
        }
    }
    true
}

/// Cursor over the top-level elements of a list.
///
/// Iteration stops at the first atomic `rest`; [`Spine::tail`] then holds that
/// atom and [`Spine::finish`] checks it is `()`.
#[derive(Debug, Clone)]
pub struct Spine<'a> {
    cursor: &'a SExp,
    position: usize,
}

/// Starts walking the top-level elements of `list`.
#[must_use]
pub fn elements(list: &SExp) -> Spine<'_> {
    Spine {
        cursor: list,
        position: 0,
    }
}

impl<'a> Spine<'a> {
    /// The part of the chain not yet walked; the terminal atom once exhausted.
    #[must_use]
    pub fn tail(&self) -> &'a SExp {
        self.cursor
    }

    /// Number of elements yielded so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Walks any remaining elements and checks the chain ends in `()`.
    pub fn finish(mut self) -> SExpResult<()> {
        for _ in self.by_ref() {}
        match self.cursor {
            SExp::Empty => Ok(()),
            SExp::Symbol(symbol) => {
                debug!(position = self.position, tail = %symbol, "list ends in a symbol");
                Err(SExpError::malformed(
                    Malformation::ImproperTail,
                    self.position,
                ))
            }
            // drained above
            SExp::Pair(..) => Err(SExpError::malformed(
                Malformation::ImproperTail,
                self.position,
            )),
        }
    }
}

impl<'a> Iterator for Spine<'a> {
    type Item = &'a SExp;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor {
            SExp::Pair(first, rest) => {
                self.cursor = rest.as_ref();
                self.position += 1;
                Some(first.as_ref())
            }
            SExp::Empty | SExp::Symbol(_) => None,
        }
    }
}

/// Fails unless `list` is `()` or a chain of pairs ending in `()`.
pub fn ensure_proper_list(list: &SExp) -> SExpResult<()> {
    elements(list).finish()
}
