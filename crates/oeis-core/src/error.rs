//! Vocabulary-level error types.
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations and carry the offending input so callers can report
//! exactly what was rejected.

use thiserror::Error;

/// A keyword token outside the closed 31-value vocabulary.
///
/// Produced by [`Keyword::from_str`](crate::Keyword) after case folding, so
/// `token` holds the input as it appeared in the source, not the folded form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown keyword: {token:?}")]
pub struct UnknownKeywordError {
    /// The rejected token, verbatim.
    pub token: String,
}
