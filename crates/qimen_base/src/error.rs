//! Error types for board construction inputs.
//!
//! Board computation itself never fails; these errors come from the
//! validating constructors and parsers that sit in front of it.

use thiserror::Error;

/// Errors from parsing or validating board inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QimenError {
    /// Method number outside 1..=9.
    #[error("method number {0} is outside 1..=9")]
    MethodOutOfRange(u8),
    /// Label does not name a known symbol of the given kind.
    #[error("unknown {kind}: {label:?}")]
    UnknownSymbol {
        /// Symbol family ("stem", "branch", "deity", ...).
        kind: &'static str,
        /// The rejected label.
        label: String,
    },
    /// Deity table has the wrong size or repeats a deity.
    #[error("invalid deity table: {0}")]
    InvalidDeityTable(String),
}
