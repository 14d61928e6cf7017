//! Shape errors raised when an operation receives a tree it cannot interpret.

use thiserror::Error;

/// Why a tree was rejected as a list of the expected shape.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Malformation {
    #[error("expected a list of pairs, found an atom")]
    AtomicTable,

    #[error("list element is not a pair")]
    NonPairEntry,

    #[error("pair key is not a symbol")]
    NonSymbolKey,

    #[error("list does not end in ()")]
    ImproperTail,

    #[error("query key is not a symbol")]
    NonSymbolQuery,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SExpError {
    /// `position` is the zero-based index along the top-level list where the
    /// problem was found.
    #[error("malformed list at position {position}: {reason}")]
    MalformedList {
        reason: Malformation,
        position: usize,
    },
}

impl SExpError {
    #[must_use]
    pub fn malformed(reason: Malformation, position: usize) -> Self {
        SExpError::MalformedList { reason, position }
    }

    #[must_use]
    pub fn reason(&self) -> Malformation {
        match self {
            SExpError::MalformedList { reason, .. } => *reason,
        }
    }
}

pub type SExpResult<T> = Result<T, SExpError>;
