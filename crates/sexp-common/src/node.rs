//! # S-expression Nodes
//!
//! An S-expression is a binary tree with three node kinds:
//!
//! | Scheme | Rust |
//! |--------|------|
//! | `'()` | [`SExp::Empty`] |
//! | `'foo` | [`SExp::Symbol`] |
//! | `(cons a b)` | [`SExp::Pair`] |
//!
//! Empty and Symbol nodes are *atomic*; a Pair owns its two children through
//! `Arc`, so cloning a tree is O(1) and transforms can share every subtree
//! they leave untouched.
//!
//! ## Example
//!
//! ```
//! use sexp_common::{sym, SExp};
//!
//! let pair = SExp::pair(sym("dotted"), sym("pair"));
//! assert!(pair.is_pair());
//! assert_eq!(pair.first(), Some(&sym("dotted")));
//! assert_eq!(pair.rest(), Some(&sym("pair")));
//!
//! // Accessors never panic on atoms
//! assert_eq!(SExp::empty().first(), None);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ptr;
use std::sync::{Arc, OnceLock};

/// An atomic symbol: an immutable string value.
///
/// Two symbols are equal iff their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Symbol(Arc<str>);

impl Symbol {
    #[must_use]
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Symbol(text.into())
    }

    /// The textual form used verbatim by printers.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Symbol::new(text)
    }
}

impl From<String> for Symbol {
    fn from(text: String) -> Self {
        Symbol::new(text)
    }
}

/// A node of an S-expression tree.
///
/// `==`, hashing and `{:?}` walk the tree with explicit stacks, so they are
/// safe on lists of any length.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SExp {
    /// The empty list `()`.
    #[default]
    Empty,
    /// An atomic leaf.
    Symbol(Symbol),
    /// A cons cell: `first` (head) and `rest` (tail).
    Pair(Arc<SExp>, Arc<SExp>),
}

impl SExp {
    /// Creates the empty list.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        SExp::Empty
    }

    /// Creates a symbol node.
    #[inline]
    #[must_use]
    pub fn symbol(text: impl Into<Symbol>) -> Self {
        SExp::Symbol(text.into())
    }

    /// Creates a pair (cons cell).
    ///
    /// Accepts owned nodes or already shared `Arc<SExp>` subtrees, so an
    /// existing subtree can be linked in without copying it.
    ///
    /// # Scheme equivalent
    /// ```scheme
    /// (cons 'a '()) => (a)
    /// ```
    #[inline]
    #[must_use]
    pub fn pair(first: impl Into<Arc<SExp>>, rest: impl Into<Arc<SExp>>) -> Self {
        SExp::Pair(first.into(), rest.into())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, SExp::Empty)
    }

    /// True for every node that is not a pair (Empty or Symbol).
    #[inline]
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        !self.is_pair()
    }

    #[inline]
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self, SExp::Pair(..))
    }

    #[inline]
    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, SExp::Symbol(_))
    }

    /// The head of a pair, `None` for atoms.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&SExp> {
        self.as_pair().map(|(first, _)| first)
    }

    /// The tail of a pair, `None` for atoms.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> Option<&SExp> {
        self.as_pair().map(|(_, rest)| rest)
    }

    #[inline]
    #[must_use]
    pub fn as_pair(&self) -> Option<(&SExp, &SExp)> {
        match self {
            SExp::Pair(first, rest) => Some((first, rest)),
            SExp::Empty | SExp::Symbol(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            SExp::Symbol(symbol) => Some(symbol),
            SExp::Empty | SExp::Pair(..) => None,
        }
    }

    /// Value equality between atoms.
    ///
    /// `()` equals `()`, symbols are equal iff their strings are. A pair is
    /// never equal to anything under this test; use structural equality for
    /// whole trees.
    ///
    /// ```
    /// use sexp_common::{sym, SExp};
    ///
    /// assert!(SExp::empty().atomic_eq(&SExp::empty()));
    /// assert!(sym("a").atomic_eq(&sym("a")));
    /// assert!(!sym("a").atomic_eq(&SExp::empty()));
    /// ```
    #[must_use]
    pub fn atomic_eq(&self, other: &SExp) -> bool {
        match (self, other) {
            (SExp::Empty, SExp::Empty) => true,
            (SExp::Symbol(a), SExp::Symbol(b)) => a == b,
            _ => false,
        }
    }
}

/// Structural equality, compared pairwise in lockstep.
///
/// Subtrees shared by both sides are skipped without descending.
impl PartialEq for SExp {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            if ptr::eq(a, b) {
                continue;
            }
            match (a, b) {
                (SExp::Pair(a_first, a_rest), SExp::Pair(b_first, b_rest)) => {
                    pending.push((a_rest.as_ref(), b_rest.as_ref()));
                    pending.push((a_first.as_ref(), b_first.as_ref()));
                }
                (SExp::Pair(..), _) | (_, SExp::Pair(..)) => return false,
                (SExp::Empty | SExp::Symbol(_), SExp::Empty | SExp::Symbol(_)) => {
                    if !a.atomic_eq(b) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

impl Eq for SExp {}

impl Hash for SExp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                SExp::Empty => state.write_u8(0),
                SExp::Symbol(symbol) => {
                    state.write_u8(1);
                    symbol.hash(state);
                }
                SExp::Pair(first, rest) => {
                    state.write_u8(2);
                    pending.push(rest);
                    pending.push(first);
                }
            }
        }
    }
}

/// Debug output in constructor form, e.g. `Pair(Symbol("a"), Empty)`.
impl fmt::Debug for SExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Token<'a> {
            Node(&'a SExp),
            Text(&'static str),
        }

        let mut pending = vec![Token::Node(self)];
        while let Some(token) = pending.pop() {
            match token {
                Token::Text(text) => f.write_str(text)?,
                Token::Node(SExp::Empty) => f.write_str("Empty")?,
                Token::Node(SExp::Symbol(symbol)) => write!(f, "Symbol({:?})", symbol.as_str())?,
                Token::Node(SExp::Pair(first, rest)) => {
                    f.write_str("Pair(")?;
                    pending.push(Token::Text(")"));
                    pending.push(Token::Node(rest));
                    pending.push(Token::Text(", "));
                    pending.push(Token::Node(first));
                }
            }
        }
        Ok(())
    }
}

/// Placeholder swapped into a pair while it is being torn down.
fn shared_empty() -> Arc<SExp> {
    static EMPTY: OnceLock<Arc<SExp>> = OnceLock::new();
    Arc::clone(EMPTY.get_or_init(|| Arc::new(SExp::Empty)))
}

/// Detaches uniquely owned pair children onto an explicit stack so a long
/// chain is freed in a loop instead of one nested drop per pair.
impl Drop for SExp {
    fn drop(&mut self) {
        let mut pending: Vec<Arc<SExp>> = Vec::new();
        detach_pair_children(self, &mut pending);
        while let Some(child) = pending.pop() {
            if let Some(mut node) = Arc::into_inner(child) {
                detach_pair_children(&mut node, &mut pending);
            }
        }
    }
}

fn detach_pair_children(node: &mut SExp, pending: &mut Vec<Arc<SExp>>) {
    if let SExp::Pair(first, rest) = node {
        for child in [first, rest] {
            if child.is_pair() {
                pending.push(mem::replace(child, shared_empty()));
            }
        }
    }
}

impl From<Symbol> for SExp {
    fn from(symbol: Symbol) -> Self {
        SExp::Symbol(symbol)
    }
}

/// Raw strings become symbols, so list builders accept `"a"` and nodes alike.
impl From<&str> for SExp {
    fn from(text: &str) -> Self {
        SExp::symbol(text)
    }
}

impl From<String> for SExp {
    fn from(text: String) -> Self {
        SExp::symbol(text)
    }
}

/// Shortcut for [`SExp::symbol`].
#[inline]
#[must_use]
pub fn sym(text: &str) -> SExp {
    SExp::symbol(text)
}
