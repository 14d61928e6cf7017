//! Length and height of S-expressions.

use sexp_common::SExp;

use crate::traversal::walk_preorder;

/// Number of symbols reachable from `x` in preorder.
///
/// `()` has length 0, a lone symbol has length 1, and empty lists nested
/// anywhere in the tree contribute nothing.
///
/// # Example
/// ```
/// use sexp_algo::length;
/// use sexp_common::{sexp_list, SExp};
///
/// assert_eq!(length(&sexp_list!["a", sexp_list!["b", SExp::empty(), "c"]]), 3);
/// assert_eq!(length(&SExp::empty()), 0);
/// ```
#[must_use]
pub fn length(x: &SExp) -> usize {
    let mut count = 0;
    walk_preorder(x, |atom| {
        if !atom.is_empty() {
            count += 1;
        }
        true
    });
    count
}

/// Height of `x`: `()` is 0, a symbol is 1, a pair is one more than its
/// taller child.
///
/// Evaluated with an explicit `(node, depth)` stack.
///
/// # Example
/// ```
/// use sexp_algo::height;
/// use sexp_common::{sym, SExp};
///
/// assert_eq!(height(&SExp::pair(sym("b"), sym("c"))), 2);
/// ```
#[must_use]
pub fn height(x: &SExp) -> usize {
    let mut tallest = 0;
    let mut stack = vec![(x, 1)];

    while let Some((node, depth)) = stack.pop() {
        let reached = match node {
            SExp::Empty => depth - 1,
            SExp::Symbol(_) => depth,
            SExp::Pair(first, rest) => {
                stack.push((rest.as_ref(), depth + 1));
                stack.push((first.as_ref(), depth + 1));
                depth
            }
        };
        tallest = tallest.max(reached);
    }

    tallest
}
