//! # Serializer — [`SequenceRecord`] Back to Raw Text
//!
//! Replays `field_order` and emits the line(s) for each code. The exact
//! formatting rules exist to satisfy the round-trip contract:
//!
//! - The `%I` line gets a trailing ` {identity_plus}` only when the plus
//!   content is non-empty.
//! - Term lines are re-split from the flat `terms` list using the
//!   cumulative `group_counts` partition. Every term is followed by a
//!   comma except the very last term of the `%U` line — the `%S` and `%T`
//!   lines keep a trailing comma after their final term.
//! - Annotation codes emit one line per stored entry, in stored order.
//!
//! A code in `field_order` with no serialization rule means the record was
//! edited inconsistently after parsing and is reported as
//! [`RecordError::UnsupportedFieldCode`].

use crate::error::{RecordError, RecordResult};
use crate::record::SequenceRecord;

impl SequenceRecord {
    /// Serialize the record to its textual form as bytes.
    ///
    /// For any input that parsed without error, this reproduces the
    /// original byte sequence exactly.
    pub fn marshal_text(&self) -> RecordResult<Vec<u8>> {
        self.record_string().map(String::into_bytes)
    }

    /// Serialize the record to its textual form as a `String`.
    pub fn record_string(&self) -> RecordResult<String> {
        let mut out = String::new();

        for &code in &self.field_order {
            match code {
                'I' => {
                    out.push_str("%I ");
                    out.push_str(&self.identity);
                    if !self.identity_plus.is_empty() {
                        out.push(' ');
                        out.push_str(&self.identity_plus);
                    }
                    out.push('\n');
                }
                'N' => {
                    out.push_str(&format!("%N {} {}\n", self.identity, self.name));
                }
                'A' => {
                    out.push_str(&format!("%A {} {}\n", self.identity, self.author));
                }
                'O' => {
                    out.push_str(&format!(
                        "%O {} {},{}\n",
                        self.identity, self.offset.initial_value, self.offset.first_greater_than_one
                    ));
                }
                'S' | 'T' | 'U' => {
                    let slot = (code as u8 - b'S') as usize;
                    let begin: usize = self.group_counts[..slot].iter().sum();
                    let count = self.group_counts[slot];

                    out.push_str(&format!("%{code} {} ", self.identity));
                    for (i, value) in self.terms.iter().skip(begin).take(count).enumerate() {
                        out.push_str(&value.to_string());
                        // Only the final term of the third group line goes
                        // without a trailing comma.
                        if !(code == 'U' && i == count - 1) {
                            out.push(',');
                        }
                    }
                    out.push('\n');
                }
                'K' => {
                    out.push_str(&format!("%K {} {}\n", self.identity, self.keywords_string()));
                }
                other => {
                    let Some(entries) = self.annotation_list(other) else {
                        return Err(RecordError::UnsupportedFieldCode { code: other });
                    };
                    for entry in entries {
                        out.push_str(&format!("%{other} {} {}\n", self.identity, entry));
                    }
                }
            }
        }

        Ok(out)
    }
}
