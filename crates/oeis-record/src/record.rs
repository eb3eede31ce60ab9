//! # Sequence Record — The Structured Data Model
//!
//! [`SequenceRecord`] is the in-memory form of one record of the internal
//! format. A record is a block of lines, each tagged with a one-character
//! field code:
//!
//! ```text
//! %I A000001 Identification line (required)
//! %S A000001 First line of terms (required)
//! %T A000001 Second line of terms
//! %U A000001 Third line of terms
//! %N A000001 Name (required)
//! %D A000001 Detailed reference
//! %H A000001 Link to another site
//! %F A000001 Formula
//! %Y A000001 Cross-references to other sequences
//! %A A000001 Author (required)
//! %O A000001 Offset (required)
//! %E A000001 Extensions, errors
//! %e A000001 Examples illustrating initial terms
//! %p A000001 Maple program
//! %t A000001 Mathematica program
//! %o A000001 Program in another language
//! %K A000001 Keywords (required)
//! %C A000001 Comments
//! ```
//!
//! Alongside the semantic fields, the record keeps three bookkeeping fields
//! (`field_order`, `line_counts`, `group_counts`) that let the serializer
//! replay the original line layout byte-for-byte. Only the parser writes
//! them; a caller that edits parsed fields directly is responsible for
//! keeping the bookkeeping consistent with the edited content.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use oeis_core::Keyword;

/// The annotation field codes, i.e. every code whose lines are kept as an
/// ordered list of verbatim strings, one entry per source line.
pub const ANNOTATION_CODES: [char; 10] = ['D', 'H', 'F', 'Y', 'E', 'e', 'p', 't', 'o', 'C'];

/// Offset characteristics of a sequence, from the `%O` line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceOffset {
    /// Subscript of the first term: the first valid input to the sequence.
    /// For example 0 for sequences over the non-negative integers, 1 for
    /// sequences over the positive integers.
    pub initial_value: BigInt,

    /// Position of the first entry greater than or equal to 2 in magnitude,
    /// or 1 if no such entry exists.
    pub first_greater_than_one: BigInt,
}

/// The structured form of one sequence record.
///
/// Constructed empty and populated field-by-field by
/// [`SequenceRecord::unmarshal_text`](crate::SequenceRecord::unmarshal_text)
/// while scanning lines top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    // -- Bookkeeping (written only by the parser) ---------------------------
    /// Field codes in the order code *changes* occurred during the scan:
    /// consecutive lines with the same code collapse to one entry, but a
    /// code reappears if it reoccurs non-adjacently. This is the replay
    /// script for serialization.
    #[serde(default)]
    pub field_order: Vec<char>,

    /// Total number of source lines per field code.
    #[serde(default)]
    pub line_counts: BTreeMap<char, usize>,

    /// How many terms each of the `%S`/`%T`/`%U` lines contributed, used to
    /// re-split the flat `terms` list on output. A repeated group code
    /// overwrites its slot, so a record with two non-adjacent `%S` lines is
    /// not representable — a known fidelity boundary of the format.
    #[serde(default)]
    pub group_counts: [usize; 3],

    // -- Required fields ----------------------------------------------------
    /// `%I` — the A-number, e.g. `A000001`.
    pub identity: String,

    /// Trailing content of the `%I` line: aliases from older collections
    /// (M0082, N0025), the latest revision number, and its timestamp. May
    /// be empty.
    #[serde(default)]
    pub identity_plus: String,

    /// `%N` — brief descriptive name for the sequence.
    pub name: String,

    /// `%A` — author(s) of the sequence.
    pub author: String,

    /// `%O` — offset of the sequence.
    pub offset: SequenceOffset,

    /// `%S`/`%T`/`%U` — the terms, concatenated across the group lines.
    pub terms: Vec<BigInt>,

    /// `%K` — keywords, order preserved, duplicates permitted.
    pub keywords: Vec<Keyword>,

    // -- Optional annotation groups (one entry per source line) -------------
    /// `%D` — detailed reference lines.
    #[serde(default)]
    pub references: Vec<String>,

    /// `%H` — links to other sites.
    #[serde(default)]
    pub links: Vec<String>,

    /// `%F` — formulae (when not included in the name).
    #[serde(default)]
    pub formulae: Vec<String>,

    /// `%Y` — cross-references to other sequences.
    #[serde(default)]
    pub cross_references: Vec<String>,

    /// `%E` — extensions, errors, etc.
    #[serde(default)]
    pub errata: Vec<String>,

    /// `%e` — examples illustrating the initial terms.
    #[serde(default)]
    pub examples: Vec<String>,

    /// `%p` — Maple program.
    #[serde(default)]
    pub maple_program: Vec<String>,

    /// `%t` — Mathematica program.
    #[serde(default)]
    pub mathematica_program: Vec<String>,

    /// `%o` — program in another language.
    #[serde(default)]
    pub other_program: Vec<String>,

    /// `%C` — comments.
    #[serde(default)]
    pub comments: Vec<String>,
}

impl SequenceRecord {
    /// The annotation list for `code`, or `None` if `code` is not an
    /// annotation code.
    pub fn annotation_list(&self, code: char) -> Option<&Vec<String>> {
        match code {
            'D' => Some(&self.references),
            'H' => Some(&self.links),
            'F' => Some(&self.formulae),
            'Y' => Some(&self.cross_references),
            'E' => Some(&self.errata),
            'e' => Some(&self.examples),
            'p' => Some(&self.maple_program),
            't' => Some(&self.mathematica_program),
            'o' => Some(&self.other_program),
            'C' => Some(&self.comments),
            _ => None,
        }
    }

    /// Mutable access to the annotation list for `code`.
    pub fn annotation_list_mut(&mut self, code: char) -> Option<&mut Vec<String>> {
        match code {
            'D' => Some(&mut self.references),
            'H' => Some(&mut self.links),
            'F' => Some(&mut self.formulae),
            'Y' => Some(&mut self.cross_references),
            'E' => Some(&mut self.errata),
            'e' => Some(&mut self.examples),
            'p' => Some(&mut self.maple_program),
            't' => Some(&mut self.mathematica_program),
            'o' => Some(&mut self.other_program),
            'C' => Some(&mut self.comments),
            _ => None,
        }
    }

    /// The terms as a single comma-joined string of decimal integers, with
    /// no trailing comma.
    pub fn terms_string(&self) -> String {
        self.terms
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The keywords as a comma-joined string of canonical lowercase names,
    /// exactly as they appear in a `%K` line.
    pub fn keywords_string(&self) -> String {
        self.keywords
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_accessors_cover_exactly_the_annotation_codes() {
        let rec = SequenceRecord::default();
        for code in ANNOTATION_CODES {
            assert!(rec.annotation_list(code).is_some(), "missing list for %{code}");
        }
        for code in ['I', 'N', 'A', 'O', 'S', 'T', 'U', 'K', 'Z', '%'] {
            assert!(rec.annotation_list(code).is_none(), "unexpected list for %{code}");
        }
    }

    #[test]
    fn annotation_list_mut_targets_the_same_field() {
        let mut rec = SequenceRecord::default();
        rec.annotation_list_mut('C')
            .unwrap()
            .push("first comment".to_string());
        assert_eq!(rec.comments, vec!["first comment".to_string()]);
    }

    #[test]
    fn terms_string_joins_without_trailing_comma() {
        let rec = SequenceRecord {
            terms: vec![BigInt::from(1), BigInt::from(-2), BigInt::from(5)],
            ..Default::default()
        };
        assert_eq!(rec.terms_string(), "1,-2,5");
    }

    #[test]
    fn terms_string_empty_record() {
        assert_eq!(SequenceRecord::default().terms_string(), "");
    }

    #[test]
    fn keywords_string_uses_canonical_names() {
        let rec = SequenceRecord {
            keywords: vec![Keyword::Nonn, Keyword::Nice, Keyword::Nonn],
            ..Default::default()
        };
        assert_eq!(rec.keywords_string(), "nonn,nice,nonn");
    }

    #[test]
    fn serde_roundtrip_preserves_bookkeeping() {
        let rec = SequenceRecord::parse(
            "%I A000001 M0098\n\
             %S A000001 1,1,2,\n\
             %T A000001 5,14,\n\
             %U A000001 -42\n\
             %N A000001 A name.\n\
             %C A000001 First comment.\n\
             %C A000001 Second comment.\n\
             %A A000001 An author\n\
             %O A000001 0,3\n\
             %K A000001 nonn,nice\n",
        )
        .unwrap();

        let json = serde_json::to_string(&rec).unwrap();
        let back: SequenceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
        // The replay bookkeeping survives the detour through JSON, so the
        // deserialized record still re-marshals byte-identically.
        assert_eq!(back.record_string().unwrap(), rec.record_string().unwrap());
    }
}
