//! # List Notation Printer
//!
//! Renders a tree in parenthesized list notation without recursion:
//!
//! | Tree | Notation |
//! |------|----------|
//! | `()` | `()` |
//! | symbol `Hello` | `Hello` |
//! | `(cons 'dotted 'pair)` | `(dotted . pair)` |
//! | `(list 'abcd 'def)` | `(abcd def)` |
//! | `(cons 'a (cons 'b 'c))` | `(a b . c)` |
//!
//! The printer keeps its own LIFO stack of frames. An `Element` frame prints
//! one list element (opening a new list when the element is a pair). A `Tail`
//! frame continues the list an element belongs to: another pair pushes the
//! next element, `()` closes the list, and a symbol closes it in dotted form.
//! Every opening token is therefore matched by exactly one closing token.
//!
//! ## Example
//!
//! ```
//! use sexp_algo::notation::{to_notation, Notation};
//! use sexp_common::{sexp_list, sym, SExp};
//!
//! let nested = sexp_list![sexp_list!["lists", "nested"], sexp_list!["in", "lists"]];
//! assert_eq!(to_notation(&nested), "((lists nested) (in lists))");
//!
//! let dotted = SExp::pair(sym("dotted"), sym("pair"));
//! assert_eq!(dotted.to_notation(), "(dotted . pair)");
//! assert_eq!(format!("value: {}", dotted.notation()), "value: (dotted . pair)");
//! ```

use std::fmt;

use sexp_common::SExp;

const EMPTY_LIST: &str = "()";
const OPEN: char = '(';
const CLOSE: char = ')';
const SEPARATOR: char = ' ';
const DOT: &str = ". ";

#[derive(Debug, Clone, Copy)]
enum Frame<'a> {
    /// A node printed as one element of the enclosing list.
    Element(&'a SExp),
    /// The `rest` of a list whose opening token has been written.
    Tail(&'a SExp),
}

/// Renders `x` in list notation.
///
/// `()` renders as `()`, a symbol as its bare text, and a pair whose `first`
/// and `rest` are both symbols as a dotted pair.
#[must_use]
pub fn to_notation(x: &SExp) -> String {
    match x {
        SExp::Empty => return EMPTY_LIST.to_string(),
        SExp::Symbol(symbol) => return symbol.to_string(),
        SExp::Pair(..) => {}
    }

    let mut out = String::new();
    let mut stack = vec![Frame::Element(x)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Element(node) => match node {
                SExp::Empty => {
                    out.push_str(EMPTY_LIST);
                    out.push(SEPARATOR);
                }
                SExp::Symbol(symbol) => {
                    out.push_str(symbol.as_str());
                    out.push(SEPARATOR);
                }
                SExp::Pair(first, rest) => match (first.as_ref(), rest.as_ref()) {
                    (SExp::Symbol(head), SExp::Symbol(tail)) => {
                        out.push(OPEN);
                        out.push_str(head.as_str());
                        out.push(SEPARATOR);
                        out.push_str(DOT);
                        out.push_str(tail.as_str());
                        close_list(&mut out);
                    }
                    _ => {
                        out.push(OPEN);
                        stack.push(Frame::Tail(rest));
                        stack.push(Frame::Element(first));
                    }
                },
            },
            Frame::Tail(node) => match node {
                SExp::Empty => close_list(&mut out),
                SExp::Symbol(symbol) => {
                    out.push_str(DOT);
                    out.push_str(symbol.as_str());
                    close_list(&mut out);
                }
                SExp::Pair(first, rest) => {
                    stack.push(Frame::Tail(rest));
                    stack.push(Frame::Element(first));
                }
            },
        }
    }

    out.trim().to_string()
}

/// Closes the innermost open list, dropping the separator left by its last
/// element.
fn close_list(out: &mut String) {
    if out.ends_with(SEPARATOR) {
        out.pop();
    }
    out.push(CLOSE);
    out.push(SEPARATOR);
}

/// Notation rendering as a method on trees.
pub trait Notation {
    /// See [`to_notation`].
    fn to_notation(&self) -> String;

    /// A [`fmt::Display`] adapter printing the notation.
    fn notation(&self) -> NotationDisplay<'_>;
}

impl Notation for SExp {
    fn to_notation(&self) -> String {
        to_notation(self)
    }

    fn notation(&self) -> NotationDisplay<'_> {
        NotationDisplay(self)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NotationDisplay<'a>(&'a SExp);

impl fmt::Display for NotationDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_notation(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sexp_common::{list, sexp_list, sym};

    fn bracket_counts(text: &str) -> (usize, usize) {
        (
            text.chars().filter(|&c| c == OPEN).count(),
            text.chars().filter(|&c| c == CLOSE).count(),
        )
    }

    #[test]
    fn test_atoms() {
        assert_eq!(to_notation(&SExp::empty()), "()");
        assert_eq!(to_notation(&sym("Hello")), "Hello");
    }

    #[test]
    fn test_flat_and_dotted_lists() {
        assert_eq!(to_notation(&sexp_list![sym("abcd"), sym("def")]), "(abcd def)");
        assert_eq!(
            to_notation(&SExp::pair(
                sym("Not"),
                SExp::pair(sym("exactly"), SExp::pair(sym("a"), sym("list")))
            )),
            "(Not exactly a . list)"
        );
        assert_eq!(to_notation(&SExp::pair(sym("dotted"), sym("pair"))), "(dotted . pair)");
    }

    #[test]
    fn test_nested_lists() {
        let d = sexp_list![
            sexp_list![sym("lists"), sym("nested")],
            sexp_list![sym("in"), sym("lists")]
        ];
        assert_eq!(to_notation(&d), "((lists nested) (in lists))");
    }

    #[test]
    fn test_nested_empty_lists_stay_balanced() {
        let tree = sexp_list![
            sexp_list![sym("j"), SExp::empty()],
            sexp_list![SExp::empty(), sexp_list![sym("j"), sym("z")], SExp::pair(sym("xxx"), sym("j"))]
        ];
        let text = to_notation(&tree);
        assert_eq!(text, "((j ()) (() (j z) (xxx . j)))");
        let (open, close) = bracket_counts(&text);
        assert_eq!(open, close);
    }

    #[test]
    fn test_pairs_with_empty_children() {
        assert_eq!(to_notation(&SExp::pair(SExp::empty(), SExp::empty())), "(())");
        assert_eq!(to_notation(&SExp::pair(sym("a"), SExp::empty())), "(a)");
        assert_eq!(to_notation(&SExp::pair(SExp::empty(), sym("x"))), "(() . x)");
        assert_eq!(
            to_notation(&SExp::pair(sexp_list!["a"], sym("x"))),
            "((a) . x)"
        );
    }

    #[test]
    fn test_dotted_pair_as_element() {
        let tree = sexp_list![SExp::pair(sym("a"), sym("b")), "c"];
        assert_eq!(to_notation(&tree), "((a . b) c)");
    }

    #[test]
    fn test_list_builders_print_identically() {
        let items = [
            sym("1"),
            sym("2"),
            sexp_list![
                sym(""),
                sexp_list![SExp::empty(), sym("xxx1"), SExp::empty(), sym("xxx2"), sym("xxx3")],
                SExp::empty()
            ],
            SExp::empty(),
            sym("2"),
        ];
        let folded = list(items.clone());
        let collected: SExp = items.into_iter().collect();
        assert_eq!(to_notation(&folded), to_notation(&collected));
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        let mut nested = SExp::empty();
        for _ in 0..100_000 {
            nested = SExp::pair(nested, SExp::empty());
        }
        let text = to_notation(&nested);
        let (open, close) = bracket_counts(&text);
        assert_eq!(open, 100_001);
        assert_eq!(open, close);
    }

    #[test]
    fn test_display_adapter() {
        let tree = list(["a", "b"]);
        assert_eq!(tree.notation().to_string(), "(a b)");
        assert_eq!(tree.to_notation(), "(a b)");
    }
}
