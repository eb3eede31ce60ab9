//! A-number identity helpers.
//!
//! An OEIS identity (an "A-number") is the letter `A` followed by exactly
//! six ASCII digits, e.g. `A000045`. Records keep the identity as a plain
//! string because the parser must accept whatever the source carries; the
//! validator asks this module whether the parsed value is well-formed.

/// Returns true iff `s` is `A` followed by exactly six ASCII digits.
pub fn is_valid_identity(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 7 && bytes[0] == b'A' && bytes[1..].iter().all(|b| b.is_ascii_digit())
}
