//! # List Construction
//!
//! A proper list is a chain of pairs whose `rest` chain ends in `()`:
//!
//! ```text
//! (a b c)  ==  (a . (b . (c . ())))
//! ```
//!
//! These helpers build such chains from ordinary Rust sequences and give the
//! Scheme `cons`/`car`/`cdr` vocabulary a home.
//!
//! ## Example
//!
//! ```
//! use sexp_common::list::{car, cdr, cons, list};
//! use sexp_common::{sexp_list, sym, SExp};
//!
//! // Scheme: (list 'a 'b 'c)
//! let abc = list(["a", "b", "c"]);
//!
//! // Scheme: (cons 'a (cons 'b (cons 'c '())))
//! let consed = cons(sym("a"), cons(sym("b"), cons(sym("c"), SExp::empty())));
//! assert_eq!(abc, consed);
//!
//! // Scheme: (car lst) => a, (cdr lst) => (b c)
//! assert_eq!(car(&abc), Some(&sym("a")));
//! assert_eq!(cdr(&abc), Some(&list(["b", "c"])));
//!
//! // Mixed items: raw strings become symbols, nodes are kept as-is
//! let nested = sexp_list!["a", sexp_list!["b", SExp::empty()], sym("c")];
//! assert_eq!(car(cdr(&nested).unwrap()), Some(&sexp_list!["b", SExp::empty()]));
//! ```

use crate::node::SExp;

/// Creates a pair (cons cell).
///
/// # Scheme equivalent
/// ```scheme
/// (cons 1 2) => (1 . 2)
/// ```
#[inline]
#[must_use]
pub fn cons(head: SExp, tail: SExp) -> SExp {
    SExp::pair(head, tail)
}

/// Returns the head of a pair (car), `None` for atoms.
///
/// # Scheme equivalent
/// ```scheme
/// (car '(1 2 3)) => 1
/// ```
#[inline]
#[must_use]
pub fn car(list: &SExp) -> Option<&SExp> {
    list.first()
}

/// Returns the tail of a pair (cdr), `None` for atoms.
///
/// # Scheme equivalent
/// ```scheme
/// (cdr '(1 2 3)) => (2 3)
/// ```
#[inline]
#[must_use]
pub fn cdr(list: &SExp) -> Option<&SExp> {
    list.rest()
}

/// Builds a proper list from a finite ordered sequence.
///
/// Items may be nodes or raw strings (wrapped as symbols). The chain is built
/// back to front in a single loop, so arbitrarily long sequences never recurse.
///
/// # Scheme equivalent
/// ```scheme
/// (list 'a 'b 'c) => (a b c)
/// ```
///
/// # Example
/// ```
/// use sexp_common::{list, SExp};
///
/// assert_eq!(list(Vec::<SExp>::new()), SExp::empty());
/// assert_eq!(list(["x"]), SExp::pair(SExp::symbol("x"), SExp::empty()));
/// ```
pub fn list<I>(items: I) -> SExp
where
    I: IntoIterator,
    I::Item: Into<SExp>,
    I::IntoIter: DoubleEndedIterator,
{
    items
        .into_iter()
        .rev()
        .fold(SExp::empty(), |tail, item| cons(item.into(), tail))
}

/// Collects any iterator of nodes into a proper list.
impl FromIterator<SExp> for SExp {
    fn from_iter<T: IntoIterator<Item = SExp>>(iter: T) -> Self {
        let items: Vec<SExp> = iter.into_iter().collect();
        list(items)
    }
}

/// Variadic form of [`list`] accepting a mix of nodes and raw strings.
///
/// ```
/// use sexp_common::{sexp_list, sym, SExp};
///
/// assert_eq!(sexp_list![], SExp::empty());
/// assert_eq!(sexp_list!["a", sym("b")], sexp_common::list(["a", "b"]));
/// ```
#[macro_export]
macro_rules! sexp_list {
    () => {
        $crate::SExp::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::list::list([$($crate::SExp::from($item)),+])
    };
}
