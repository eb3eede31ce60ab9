//! # oeis-record — The OEIS Internal Record Codec
//!
//! Parses and re-serializes the OEIS internal textual record format
//! (described at <https://oeis.org/eishelp1.html>): line-oriented records
//! where every line reads `%{code} {identity} {content}` and the
//! single-character code tags the line's semantic role.
//!
//! - **Parsing** ([`SequenceRecord::unmarshal_text`]): recovers a structured
//!   [`SequenceRecord`] from raw bytes, enforcing the fixed-column layout.
//!
//! - **Serialization** ([`SequenceRecord::marshal_text`]): replays the
//!   original line order from the record's bookkeeping fields and
//!   reconstructs the exact original byte sequence.
//!
//! - **Validation** ([`SequenceRecord::validate`]): checks the
//!   required-field contract (`%I %N %A %O %S %T %U %K`) and the A-number
//!   pattern.
//!
//! ## Round-Trip Fidelity
//!
//! The defining contract: for any input `T` that parses without error,
//! `marshal_text(unmarshal_text(T)?)? == T`, byte for byte. Field-by-field
//! emission is not enough — the format interleaves repeated codes
//! (multi-line term lists) and free-form ordering of annotation lines, so
//! the parser records a replay script ([`SequenceRecord::field_order`]) and
//! the per-line term partition ([`SequenceRecord::group_counts`]) that the
//! serializer consumes.

pub mod error;
pub mod marshal;
pub mod record;
pub mod unmarshal;
pub mod validation;

// Re-export primary types.
pub use error::{RecordError, RecordResult};
pub use record::{SequenceOffset, SequenceRecord, ANNOTATION_CODES};
pub use validation::REQUIRED_CODES;
