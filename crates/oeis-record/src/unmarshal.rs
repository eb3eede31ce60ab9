//! # Parser — Raw Text to [`SequenceRecord`]
//!
//! Scans the input line by line and populates a record field by field.
//! Every meaningful line has the fixed-column layout
//! `%{code} {identity} {content}`: marker at column 0, one-character code
//! at column 1, a mandatory space at column 2, the 7-column identity token
//! at columns 3–9, a mandatory space at column 10, content from column 11.
//!
//! Lines that cannot carry that layout (blank lines, lines not starting
//! with `%`) are skipped as noise, not rejected. Lines that pass the length
//! check but violate a mandatory-space position are a hard
//! [`RecordError::Format`].
//!
//! While scanning, the parser maintains the bookkeeping that makes
//! byte-exact re-serialization possible: `field_order` records each code
//! change (an adjacency check, deliberately not a set — a set would lose
//! both order and non-adjacent repetitions), `line_counts` counts every
//! line per code, and `group_counts` records the per-line term partition.

use std::str::FromStr;

use num_bigint::BigInt;
use tracing::trace;

use oeis_core::Keyword;

use crate::error::{RecordError, RecordResult};
use crate::record::SequenceRecord;

/// Column at which line content begins, one past `%C A000001 `.
pub(crate) const CONTENT_COL: usize = 11;

impl SequenceRecord {
    /// Parse a record from raw bytes.
    ///
    /// The buffer must be valid UTF-8. Returns the first error encountered;
    /// parsing does not continue past it.
    pub fn unmarshal_text(text: &[u8]) -> RecordResult<Self> {
        Self::parse(std::str::from_utf8(text)?)
    }

    /// Parse a record from a string slice.
    pub fn parse(text: &str) -> RecordResult<Self> {
        let mut rec = SequenceRecord::default();

        for line in text.split('\n') {
            let bytes = line.as_bytes();

            // The shortest line the layout admits is an identity line with
            // no trailing content: `%I A000001`, exactly 10 columns. Only
            // `%I` gets that dispensation (its emitter is the only one that
            // omits the content separator); every other code needs the full
            // 11-column layout. Anything else, or not marker-led, is noise.
            if bytes.len() < CONTENT_COL - 1
                || bytes[0] != b'%'
                || (bytes.len() == CONTENT_COL - 1 && bytes[1] != b'I')
            {
                trace!(line, "skipping non-record line");
                continue;
            }

            // The space positions are the layout sentinels. Column 10 is
            // only checked when the line extends that far.
            if bytes[2] != b' '
                || (bytes.len() >= CONTENT_COL && bytes[CONTENT_COL - 1] != b' ')
            {
                return Err(RecordError::Format {
                    line: line.to_string(),
                });
            }

            let code = bytes[1] as char;
            // Safe even with multibyte content: the column-10 space check
            // guarantees a char boundary whenever the line extends past it.
            let content = line.get(CONTENT_COL..).unwrap_or_default();

            match code {
                'I' => {
                    rec.identity = line
                        .get(3..CONTENT_COL - 1)
                        .ok_or_else(|| RecordError::Format {
                            line: line.to_string(),
                        })?
                        .to_string();
                    rec.identity_plus = content.to_string();
                }
                'N' => rec.name = content.to_string(),
                'A' => rec.author = content.to_string(),
                'O' => {
                    let values: Vec<&str> = content.split(',').collect();
                    if values.len() != 2 {
                        return Err(RecordError::OffsetArity {
                            content: content.to_string(),
                            count: values.len(),
                        });
                    }
                    rec.offset.initial_value = parse_big(code, values[0])?;
                    rec.offset.first_greater_than_one = parse_big(code, values[1])?;
                }
                'S' | 'T' | 'U' => {
                    let mut group = Vec::new();
                    for token in content.trim_end_matches(',').split(',') {
                        group.push(parse_big(code, token)?);
                    }
                    // A later line with the same code overwrites the slot;
                    // it does not accumulate.
                    rec.group_counts[(code as u8 - b'S') as usize] = group.len();
                    rec.terms.extend(group);
                }
                'K' => {
                    for token in content.split(',') {
                        rec.keywords.push(Keyword::from_str(token)?);
                    }
                }
                other => {
                    // Annotation codes append one entry per line; the code
                    // set is closed, so anything else takes no field at all.
                    if let Some(list) = rec.annotation_list_mut(other) {
                        list.push(content.to_string());
                    }
                }
            }

            // Bookkeeping for validation and re-serialization.
            if rec.field_order.last() != Some(&code) {
                rec.field_order.push(code);
            }
            *rec.line_counts.entry(code).or_insert(0) += 1;
        }

        Ok(rec)
    }
}

impl FromStr for SequenceRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse one base-10 arbitrary-precision integer token.
fn parse_big(code: char, token: &str) -> RecordResult<BigInt> {
    token.parse::<BigInt>().map_err(|_| RecordError::InvalidNumber {
        code,
        token: token.to_string(),
    })
}
