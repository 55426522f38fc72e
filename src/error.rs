//! Error types for LUQ.

use thiserror::Error;

/// Structural validation failures raised while building a query expression.
///
/// All four are unrecoverable for the expression under construction: the
/// caller must discard or rebuild the builder, nothing is retried or repaired
/// internally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// One or more groups were opened but never closed.
    #[error("missing {count} closing parenthesis (e.g. '(( term )' is invalid)")]
    UnclosedGroup { count: u64 },

    /// More groups were closed than were ever opened.
    #[error("{count} closing parenthesis in excess (e.g. '( term ))' is invalid)")]
    UnopenedGroup { count: u64 },

    /// An operator was appended while a previous operator was still waiting
    /// for its term.
    #[error("an operator is already pending a term (e.g. 'AND OR' is invalid)")]
    DanglingOperator,

    /// The expression ends with an operator and no term after it.
    #[error("missing term after operator")]
    MissingTermAfterOperator,
}

/// Result type alias for builder operations.
pub type SyntaxResult<T> = Result<T, SyntaxError>;
