//! # Validator — Required-Field and Pattern Checks
//!
//! A parsed record is not necessarily a complete record: the parser accepts
//! any well-laid-out subset of lines. Validation answers whether the record
//! satisfies the format's required-field contract.
//!
//! The policy is fail-fast, one error at a time: the first violation is
//! returned and nothing is aggregated. All three term-group codes (`%S`,
//! `%T`, `%U`) are required even for sequences short enough to fit on one
//! line; many real records carry fewer, and those fail validation.

use oeis_core::is_valid_identity;

use crate::error::{RecordError, RecordResult};
use crate::record::SequenceRecord;

/// Field codes every valid record must carry, in the order they are checked.
pub const REQUIRED_CODES: [char; 8] = ['I', 'N', 'A', 'O', 'S', 'T', 'U', 'K'];

impl SequenceRecord {
    /// Validate the record against the required-field contract.
    pub fn validate(&self) -> RecordResult<()> {
        self.check_required_fields()
    }

    /// Check that every required field code appeared, the identity matches
    /// the A-number pattern, and the required text fields are non-empty.
    pub fn check_required_fields(&self) -> RecordResult<()> {
        for code in REQUIRED_CODES {
            if !self.field_order.contains(&code) {
                return Err(RecordError::MissingField { code });
            }
        }

        if !is_valid_identity(&self.identity) {
            return Err(RecordError::InvalidIdentity {
                identity: self.identity.clone(),
            });
        }

        // Could be any textual description, but must be present.
        if self.name.is_empty() {
            return Err(RecordError::MissingContent { field: "name" });
        }

        if self.author.is_empty() {
            return Err(RecordError::MissingContent { field: "author" });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A complete, valid record exercising all eight required codes.
    fn complete() -> SequenceRecord {
        SequenceRecord::parse(
            "%I A000001\n\
             %S A000001 1,2,3,\n\
             %T A000001 4,5,6,\n\
             %U A000001 7\n\
             %N A000001 A name.\n\
             %A A000001 An author\n\
             %O A000001 1,3\n\
             %K A000001 nonn\n",
        )
        .unwrap()
    }

    #[test]
    fn complete_record_validates() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn each_required_code_is_enforced() {
        for missing in REQUIRED_CODES {
            let mut rec = complete();
            rec.field_order.retain(|&c| c != missing);
            let err = rec.validate().unwrap_err();
            assert!(
                matches!(err, RecordError::MissingField { code } if code == missing),
                "dropping %{missing} gave {err:?}"
            );
        }
    }

    #[test]
    fn first_missing_code_wins() {
        // Both %T and %U absent: %T is reported because it is checked first.
        let rec = SequenceRecord::parse(
            "%I A000001\n\
             %S A000001 1,1,2,5,14,42,\n\
             %N A000001 Number of groups of order n.\n\
             %A A000001 N. Sloane\n\
             %O A000001 0,1\n\
             %K A000001 nonn,nice\n",
        )
        .unwrap();
        let err = rec.validate().unwrap_err();
        assert!(matches!(err, RecordError::MissingField { code: 'T' }), "got {err:?}");
    }

    #[test]
    fn identity_pattern_is_enforced() {
        for bad in ["B000001", "A00001", "A0000001", "", "A00000x"] {
            let mut rec = complete();
            rec.identity = bad.to_string();
            let err = rec.validate().unwrap_err();
            assert!(
                matches!(err, RecordError::InvalidIdentity { .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut rec = complete();
        rec.name.clear();
        let err = rec.validate().unwrap_err();
        assert!(matches!(err, RecordError::MissingContent { field: "name" }), "got {err:?}");
    }

    #[test]
    fn empty_author_is_rejected() {
        let mut rec = complete();
        rec.author.clear();
        let err = rec.validate().unwrap_err();
        assert!(
            matches!(err, RecordError::MissingContent { field: "author" }),
            "got {err:?}"
        );
    }
}
