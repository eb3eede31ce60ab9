//! Record-level error types.
//!
//! Structured errors for parsing, serializing, and validating sequence
//! records. Every variant carries the offending input (raw line, token, or
//! field code) so batch-processing callers can report precisely which record
//! and which line failed. Errors are returned on first violation; parsing
//! never continues past an error and nothing is retried internally.

use oeis_core::UnknownKeywordError;
use thiserror::Error;

/// Convenience alias for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors that can occur while parsing, serializing, or validating a record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A line passed the length check but violates the fixed-column layout
    /// (missing mandatory space at column 2 or 10).
    #[error("malformed record line: {line:?}")]
    Format {
        /// The raw offending line, verbatim.
        line: String,
    },

    /// A token in a `%O` or term-group line is not a base-10 integer.
    #[error("invalid integer {token:?} in %{code} line")]
    InvalidNumber {
        /// Field code of the line containing the token.
        code: char,
        /// The rejected token, verbatim.
        token: String,
    },

    /// A `%O` line does not have exactly two comma-separated values.
    #[error("offset must have exactly 2 comma-separated values, got {count}: {content:?}")]
    OffsetArity {
        /// The offset line's content portion.
        content: String,
        /// How many tokens the split produced.
        count: usize,
    },

    /// A `%K` token is outside the closed keyword vocabulary.
    #[error(transparent)]
    UnknownKeyword(#[from] UnknownKeywordError),

    /// A required field code never appeared in the record.
    #[error("missing required field: %{code}")]
    MissingField {
        /// The absent field code.
        code: char,
    },

    /// The identity does not match the A-number pattern (`A` + 6 digits).
    #[error("invalid identity: {identity:?}")]
    InvalidIdentity {
        /// The parsed identity value.
        identity: String,
    },

    /// A required free-text field is empty.
    #[error("missing {field}")]
    MissingContent {
        /// Name of the empty field.
        field: &'static str,
    },

    /// A field code with no serialization rule reached the serializer.
    /// Unreachable for parser-produced records; indicates the record was
    /// edited inconsistently after parsing.
    #[error("unsupported field code: %{code}")]
    UnsupportedFieldCode {
        /// The unrecognized code.
        code: char,
    },

    /// The input byte buffer is not valid UTF-8.
    #[error("record text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
