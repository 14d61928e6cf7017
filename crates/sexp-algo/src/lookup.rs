//! # Association Lists
//!
//! A table is a proper list of pairs, each pair a symbol key and its value:
//!
//! ```text
//! ((CoolGuy . xxx) (RealCoolGuy . yyy) (AbsoluteRealCoolGuy . Theodore))
//! ```
//!
//! A missing key is a normal outcome and yields `()`. A table of the wrong
//! shape is a caller error and yields [`SExpError::MalformedList`].
//!
//! ## Example
//!
//! ```
//! use sexp_algo::lookup::{lookup, lookup_many};
//! use sexp_common::{list, sexp_list, sym, SExp, Symbol};
//!
//! let table = sexp_list![
//!     SExp::pair(sym("CoolGuy"), sym("xxx")),
//!     SExp::pair(sym("RealCoolGuy"), sym("yyy")),
//! ];
//!
//! assert_eq!(lookup(&Symbol::from("RealCoolGuy"), &table)?, sym("yyy"));
//! assert_eq!(lookup(&Symbol::from("NoSuchKey"), &table)?, SExp::empty());
//! assert_eq!(
//!     lookup_many(&list(["RealCoolGuy", "Nobody"]), &table)?,
//!     sexp_list!["yyy", SExp::empty()]
//! );
//! # Ok::<(), sexp_common::SExpError>(())
//! ```

use im::HashMap as ImHashMap;
use sexp_common::{Malformation, SExp, SExpError, SExpResult, Symbol};
use tracing::{debug, instrument};

use crate::transform::try_map_list;
use crate::traversal::{elements, ensure_proper_list};

/// Finds the value bound to `key` in the association list `table`.
///
/// The table is walked front to back and each entry is checked as it is
/// reached; the first matching key wins and entries after it are not
/// inspected. Reaching `()` without a match returns `()`.
///
/// # Errors
///
/// [`SExpError::MalformedList`] when `table` is an atom (including `()`),
/// when an entry before the match is not a pair or has a non-symbol key, or
/// when the list ends in a symbol.
#[instrument(level = "trace", skip_all, fields(key = %key))]
pub fn lookup(key: &Symbol, table: &SExp) -> SExpResult<SExp> {
    if table.is_atomic() {
        return Err(reject(Malformation::AtomicTable, 0));
    }

    let mut spine = elements(table);
    for (position, entry) in spine.by_ref().enumerate() {
        let (entry_key, value) = split_entry(entry, position)?;
        if entry_key == key {
            return Ok(value.clone());
        }
    }
    spine.finish()?;

    Ok(SExp::empty())
}

/// Looks up every key of the proper list `keys`, returning the values in the
/// same order (`()` for keys that are not bound).
///
/// # Errors
///
/// Everything [`lookup`] rejects, plus a non-symbol key
/// ([`Malformation::NonSymbolQuery`]) or a `keys` chain not ending in `()`.
#[instrument(level = "trace", skip_all)]
pub fn lookup_many(keys: &SExp, table: &SExp) -> SExpResult<SExp> {
    ensure_proper_list(keys)?;

    let mut position = 0;
    try_map_list(
        |key| {
            let value = match key.as_symbol() {
                Some(symbol) => lookup(symbol, table),
                None => Err(reject(Malformation::NonSymbolQuery, position)),
            };
            position += 1;
            value
        },
        keys,
    )
}

/// A persistent index over a validated association list.
///
/// Built once, queried in O(log n) per key with the same answers as
/// [`lookup`]: the first binding of a key shadows later ones and unbound keys
/// yield `()`. Unlike [`lookup`], construction validates every entry.
#[derive(Debug, Clone, Default)]
pub struct AssocIndex {
    bindings: ImHashMap<Symbol, SExp>,
}

impl AssocIndex {
    /// Indexes `table`.
    ///
    /// # Errors
    ///
    /// The same shape errors as [`lookup`], for any entry in the table.
    #[instrument(level = "trace", skip_all)]
    pub fn from_table(table: &SExp) -> SExpResult<Self> {
        if table.is_atomic() {
            return Err(reject(Malformation::AtomicTable, 0));
        }

        let mut bindings = ImHashMap::new();
        let mut spine = elements(table);
        for (position, entry) in spine.by_ref().enumerate() {
            let (key, value) = split_entry(entry, position)?;
            if !bindings.contains_key(key) {
                bindings.insert(key.clone(), value.clone());
            }
        }
        spine.finish()?;

        debug!(keys = bindings.len(), "indexed association list");
        Ok(Self { bindings })
    }

    /// The value bound to `key`, or `()`.
    #[must_use]
    pub fn get(&self, key: &Symbol) -> SExp {
        self.bindings.get(key).cloned().unwrap_or_default()
    }

    /// [`lookup_many`] against the index.
    ///
    /// # Errors
    ///
    /// A non-symbol key or a `keys` chain not ending in `()`.
    pub fn get_many(&self, keys: &SExp) -> SExpResult<SExp> {
        ensure_proper_list(keys)?;

        let mut position = 0;
        try_map_list(
            |key| {
                let value = match key.as_symbol() {
                    Some(symbol) => Ok(self.get(symbol)),
                    None => Err(reject(Malformation::NonSymbolQuery, position)),
                };
                position += 1;
                value
            },
            keys,
        )
    }

    #[must_use]
    pub fn contains_key(&self, key: &Symbol) -> bool {
        self.bindings.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Checks one table entry has the `(symbol . value)` shape.
fn split_entry(entry: &SExp, position: usize) -> SExpResult<(&Symbol, &SExp)> {
    match entry {
        SExp::Pair(key, value) => match key.as_ref() {
            SExp::Symbol(symbol) => Ok((symbol, value.as_ref())),
            SExp::Empty | SExp::Pair(..) => Err(reject(Malformation::NonSymbolKey, position)),
        },
        SExp::Empty | SExp::Symbol(_) => Err(reject(Malformation::NonPairEntry, position)),
    }
}

fn reject(reason: Malformation, position: usize) -> SExpError {
    debug!(%reason, position, "rejecting malformed association list");
    SExpError::malformed(reason, position)
}
