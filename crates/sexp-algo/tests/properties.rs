//! Property tests over generated trees and lists.

mod common;

use proptest::prelude::*;
use sexp_algo::{
    atoms, concat, elements, equal, flatten, height, length, lookup, map_list, replace, reverse,
    to_notation, walk_preorder,
};
use sexp_common::{list, Malformation, SExp, Symbol};

use common::init_test_setup;

fn symbol() -> impl Strategy<Value = SExp> {
    "[a-z]{1,3}".prop_map(|text| SExp::symbol(text))
}

fn atom() -> impl Strategy<Value = SExp> {
    prop_oneof![1 => Just(SExp::empty()), 4 => symbol()]
}

/// Arbitrary binary trees, proper lists or not.
fn tree() -> impl Strategy<Value = SExp> {
    atom().prop_recursive(6, 64, 2, |inner| {
        (inner.clone(), inner).prop_map(|(first, rest)| SExp::pair(first, rest))
    })
}

fn proper_list() -> impl Strategy<Value = SExp> {
    prop::collection::vec(tree(), 0..8).prop_map(|items| list(items))
}

/// Association lists with lowercase symbol keys.
fn table() -> impl Strategy<Value = (Vec<(String, SExp)>, SExp)> {
    prop::collection::vec(("[a-z]{1,2}", tree()), 1..6).prop_map(|entries| {
        let table = list(
            entries
                .iter()
                .map(|(key, value)| SExp::pair(SExp::symbol(key.as_str()), value.clone()))
                .collect::<Vec<_>>(),
        );
        (entries, table)
    })
}

fn recursive_atoms(x: &SExp, out: &mut Vec<SExp>) {
    match x {
        SExp::Pair(first, rest) => {
            recursive_atoms(first, out);
            recursive_atoms(rest, out);
        }
        SExp::Empty | SExp::Symbol(_) => out.push(x.clone()),
    }
}

/// Rebuilds every pair, sharing nothing with `x`.
fn deep_copy(x: &SExp) -> SExp {
    match x {
        SExp::Pair(first, rest) => SExp::pair(deep_copy(first), deep_copy(rest)),
        SExp::Empty => SExp::empty(),
        SExp::Symbol(symbol) => SExp::symbol(symbol.as_str()),
    }
}

fn count_brackets(text: &str) -> (usize, usize) {
    (text.matches('(').count(), text.matches(')').count())
}

proptest! {
    #[test]
    fn preorder_matches_recursive_walk(x in tree()) {
        init_test_setup();
        let mut expected = Vec::new();
        recursive_atoms(&x, &mut expected);
        let walked: Vec<SExp> = atoms(&x).cloned().collect();
        prop_assert_eq!(walked, expected);
    }

    #[test]
    fn walk_stops_after_false(x in tree(), limit in 1usize..5) {
        let mut calls = 0;
        let completed = walk_preorder(&x, |_| {
            calls += 1;
            calls < limit
        });
        let total = atoms(&x).count();
        prop_assert_eq!(calls, total.min(limit));
        prop_assert_eq!(completed, total < limit);
    }

    #[test]
    fn length_counts_symbols(x in tree()) {
        let symbols = atoms(&x).filter(|atom| atom.is_symbol()).count();
        prop_assert_eq!(length(&x), symbols);
    }

    #[test]
    fn height_follows_recurrence(a in tree(), b in tree()) {
        let pair = SExp::pair(a.clone(), b.clone());
        prop_assert_eq!(height(&pair), 1 + height(&a).max(height(&b)));
    }

    #[test]
    fn equal_is_reflexive_and_matches_eq(x in tree(), y in tree()) {
        prop_assert!(equal(&x, &x));
        prop_assert!(equal(&x, &deep_copy(&x)));
        prop_assert_eq!(equal(&x, &y), x == y);
    }

    #[test]
    fn reverse_is_self_inverse(x in proper_list()) {
        let twice = reverse(&reverse(&x).unwrap()).unwrap();
        prop_assert!(equal(&twice, &x));
    }

    #[test]
    fn reverse_flips_top_level_order(x in proper_list()) {
        let reversed = reverse(&x).unwrap();
        let mut expected: Vec<&SExp> = elements(&x).collect();
        expected.reverse();
        let actual: Vec<&SExp> = elements(&reversed).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn flatten_is_idempotent(x in tree()) {
        let once = flatten(&x);
        prop_assert!(equal(&once, &flatten(&once)));
        prop_assert!(height(&once) <= length(&once) + 1);
        prop_assert_eq!(length(&once), length(&x));
    }

    #[test]
    fn concat_appends_elements(x in proper_list(), y in proper_list()) {
        let joined = concat(&x, &y).unwrap();
        prop_assert_eq!(length(&joined), length(&x) + length(&y));

        let expected: Vec<&SExp> = elements(&x).chain(elements(&y)).collect();
        let actual: Vec<&SExp> = elements(&joined).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn replace_leaves_input_untouched(x in tree(), target in "[a-z]{1,3}", replacement in tree()) {
        let original = deep_copy(&x);
        let target = Symbol::from(target.as_str());

        let replaced = replace(&target, &replacement, &x);

        prop_assert!(equal(&x, &original));
        if !atoms(&replacement).any(|atom| atom.as_symbol() == Some(&target)) {
            prop_assert!(!atoms(&replaced).any(|atom| atom.as_symbol() == Some(&target)));
        }
    }

    #[test]
    fn map_identity_preserves_list(x in proper_list()) {
        prop_assert!(equal(&map_list(SExp::clone, &x), &x));
    }

    #[test]
    fn lookup_returns_first_binding((entries, table) in table()) {
        for (key, _) in &entries {
            let first = entries.iter().find(|(k, _)| k == key).map(|(_, v)| v);
            let found = lookup(&Symbol::from(key.as_str()), &table).unwrap();
            prop_assert_eq!(Some(&found), first);
        }
        // generated keys are lowercase
        prop_assert_eq!(lookup(&Symbol::from("ABSENT"), &table), Ok(SExp::empty()));
    }

    #[test]
    fn lookup_rejects_symbol_entries((entries, table) in table(), stray in "[A-Z]{1,3}") {
        let poisoned = SExp::pair(SExp::symbol(stray.as_str()), table);
        let err = lookup(&Symbol::from(entries[0].0.as_str()), &poisoned).unwrap_err();
        prop_assert_eq!(err.reason(), Malformation::NonPairEntry);
    }

    #[test]
    fn notation_brackets_balance(x in tree()) {
        let text = to_notation(&x);
        let (open, close) = count_brackets(&text);
        prop_assert_eq!(open, close);
        prop_assert_eq!(text.trim(), text.as_str());
    }

    #[test]
    fn notation_of_flat_symbol_list(words in prop::collection::vec("[a-z]{1,4}", 1..6)) {
        let x = list(words.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(to_notation(&x), format!("({})", words.join(" ")));
    }
}
