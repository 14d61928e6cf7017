//! # Structural Predicates and Transforms
//!
//! Equality, substitution and the list transforms. Every transform returns a
//! new tree; inputs are never modified, and subtrees that come through a
//! transform unchanged are shared with the input rather than copied.
//!
//! | Scheme | Rust |
//! |--------|------|
//! | `(equal? x y)` | [`equal`] |
//! | `(subst new old tree)` | [`replace`] |
//! | `(append x y)` | [`concat`] |
//! | `(reverse x)` | [`reverse`] |
//! | `(fringe x)` | [`flatten`] |
//! | `(map f x)` | [`map_list`] |

use std::convert::Infallible;
use std::sync::Arc;

use sexp_common::{list, Malformation, SExp, SExpError, SExpResult, Symbol};
use tracing::{debug, instrument};

use crate::traversal::{elements, nodes, walk_preorder, Branch};

/// Structural (deep) equality.
///
/// Same as `x == y`: pairs are compared in lockstep from an explicit stack,
/// and subtrees shared by both sides are skipped without descending.
///
/// # Example
/// ```
/// use sexp_algo::equal;
/// use sexp_common::{sexp_list, SExp};
///
/// let x = sexp_list!["a", sexp_list![SExp::empty(), "b", SExp::empty()], "c"];
/// assert!(equal(&x, &x.clone()));
/// assert!(!equal(&x, &SExp::empty()));
/// ```
#[must_use]
pub fn equal(x: &SExp, y: &SExp) -> bool {
    x == y
}

/// Replaces every occurrence of the symbol `target` in `tree` with
/// `replacement`.
///
/// Pairs on the path to a replaced leaf are rebuilt bottom-up from an
/// explicit stack; every other subtree is shared with `tree`, which is left
/// untouched.
///
/// # Example
/// ```
/// use sexp_algo::replace;
/// use sexp_common::{sexp_list, Symbol};
///
/// let tree = sexp_list!["k", sexp_list!["z", "k"]];
/// let replaced = replace(&Symbol::from("k"), &"j".into(), &tree);
/// assert_eq!(replaced, sexp_list!["j", sexp_list!["z", "j"]]);
/// assert_eq!(tree, sexp_list!["k", sexp_list!["z", "k"]]);
/// ```
#[must_use]
pub fn replace(target: &Symbol, replacement: &SExp, tree: &SExp) -> SExp {
    enum Step<'a> {
        Visit(&'a SExp),
        Join(&'a Arc<SExp>, &'a Arc<SExp>),
    }

    // One entry per finished subtree; `None` means it holds no `target`.
    let mut rebuilt: Vec<Option<SExp>> = Vec::new();
    let mut steps = vec![Step::Visit(tree)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(SExp::Pair(first, rest)) => {
                steps.push(Step::Join(first, rest));
                steps.push(Step::Visit(rest));
                steps.push(Step::Visit(first));
            }
            Step::Visit(SExp::Symbol(symbol)) if symbol == target => {
                rebuilt.push(Some(replacement.clone()));
            }
            Step::Visit(SExp::Empty | SExp::Symbol(_)) => rebuilt.push(None),
            Step::Join(first, rest) => {
                let new_rest = rebuilt.pop().flatten();
                let new_first = rebuilt.pop().flatten();
                rebuilt.push(match (new_first, new_rest) {
                    (None, None) => None,
                    (new_first, new_rest) => Some(SExp::pair(
                        new_first.map_or_else(|| Arc::clone(first), Arc::new),
                        new_rest.map_or_else(|| Arc::clone(rest), Arc::new),
                    )),
                });
            }
        }
    }

    rebuilt.pop().flatten().unwrap_or_else(|| tree.clone())
}

/// Reverses the top-level order of a list.
///
/// Nested lists keep their internal order. An atom is returned unchanged; a
/// chain that ends in a symbol instead of `()` is rejected.
///
/// # Example
/// ```
/// use sexp_algo::reverse;
/// use sexp_common::sexp_list;
///
/// let x = sexp_list!["1", "2", sexp_list!["3", "4"], "5"];
/// assert_eq!(reverse(&x)?, sexp_list!["5", sexp_list!["3", "4"], "2", "1"]);
/// # Ok::<(), sexp_common::SExpError>(())
/// ```
#[instrument(level = "trace", skip_all)]
pub fn reverse(x: &SExp) -> SExpResult<SExp> {
    if x.is_atomic() {
        return Ok(x.clone());
    }

    let mut spine = elements(x);
    let reversed = spine
        .by_ref()
        .fold(SExp::empty(), |acc, element| SExp::pair(element.clone(), acc));
    spine.finish()?;

    Ok(reversed)
}

/// The elements of `x` followed by the elements of `y`.
///
/// Each input is walked once with the preorder engine. Only the `rest` chain
/// is followed: every `first` reached is a whole element, pushed onto an
/// accumulator and pruned so its insides are never visited. The `()`
/// terminators are dropped and the accumulator is reversed once at the end. Either input
/// may be `()`; a symbol or a chain ending in a symbol is rejected.
///
/// # Example
/// ```
/// use sexp_algo::concat;
/// use sexp_common::list;
///
/// let joined = concat(&list(["a", "b", "c"]), &list(["d", "e", "f"]))?;
/// assert_eq!(joined, list(["a", "b", "c", "d", "e", "f"]));
/// # Ok::<(), sexp_common::SExpError>(())
/// ```
#[instrument(level = "trace", skip_all)]
pub fn concat(x: &SExp, y: &SExp) -> SExpResult<SExp> {
    let mut acc = SExp::empty();

    for input in [x, y] {
        let mut position = 0;
        let mut walk = nodes(input);
        while let Some((node, branch)) = walk.next() {
            match (branch, node) {
                (Branch::First, element) => {
                    acc = SExp::pair(element.clone(), acc);
                    position += 1;
                    walk.prune();
                }
                (Branch::Root | Branch::Rest, SExp::Pair(..) | SExp::Empty) => {}
                (Branch::Root | Branch::Rest, SExp::Symbol(symbol)) => {
                    debug!(position, tail = %symbol, "list ends in a symbol");
                    return Err(SExpError::malformed(Malformation::ImproperTail, position));
                }
            }
        }
    }

    reverse(&acc)
}

/// Every symbol reachable from `x`, in preorder, as one flat list.
///
/// Empty lists encountered along the way are dropped.
///
/// # Example
/// ```
/// use sexp_algo::flatten;
/// use sexp_common::{list, sexp_list, SExp};
///
/// let x = sexp_list!["1", sexp_list![sexp_list![SExp::empty(), "2"], "3"]];
/// assert_eq!(flatten(&x), list(["1", "2", "3"]));
/// ```
#[must_use]
pub fn flatten(x: &SExp) -> SExp {
    let mut atoms = Vec::new();
    walk_preorder(x, |atom| {
        if !atom.is_empty() {
            atoms.push(atom.clone());
        }
        true
    });
    list(atoms)
}

/// Applies `f` to every top-level element of `list`.
///
/// `f` sees whole elements, so nested lists are passed to it intact. The
/// terminal tail of the chain is kept as it is, and an atomic `list` is
/// returned unchanged.
///
/// # Example
/// ```
/// use sexp_algo::map_list;
/// use sexp_common::{list, sym, SExp};
///
/// let tagged = map_list(|element| SExp::pair(sym("tag"), element.clone()), &list(["a", "b"]));
/// assert_eq!(
///     tagged,
///     list([SExp::pair(sym("tag"), sym("a")), SExp::pair(sym("tag"), sym("b"))])
/// );
/// ```
pub fn map_list<F>(mut f: F, list: &SExp) -> SExp
where
    F: FnMut(&SExp) -> SExp,
{
    match try_map_list(|element| Ok::<_, Infallible>(f(element)), list) {
        Ok(mapped) => mapped,
        Err(never) => match never {},
    }
}

/// Fallible form of [`map_list`]: the first error returned by `f` is returned.
pub fn try_map_list<F, E>(mut f: F, list: &SExp) -> Result<SExp, E>
where
    F: FnMut(&SExp) -> Result<SExp, E>,
{
    if list.is_atomic() {
        return Ok(list.clone());
    }

    let mut spine = elements(list);
    let mapped = spine.by_ref().map(&mut f).collect::<Result<Vec<_>, E>>()?;
    let tail = spine.tail().clone();

    Ok(mapped
        .into_iter()
        .rev()
        .fold(tail, |acc, element| SExp::pair(element, acc)))
}
