//! # Keyword — The Closed Classification Vocabulary
//!
//! Defines the `Keyword` enum with all 31 OEIS keywords. This is the ONE
//! definition used across the workspace. Every `match` on `Keyword` must be
//! exhaustive — a silently missing keyword is impossible by construction.
//!
//! Keywords appear in a record's `%K` line as a comma-separated list, e.g.
//! `%K A000045 core,nonn,nice,easy`. Parsing is case-insensitive; the
//! canonical rendering is always lowercase.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownKeywordError;

/// The classification keywords recognized in a `%K` line.
///
/// Each keyword is a curator-assigned property of the sequence as a whole.
/// The set is closed: the OEIS internal format defines exactly these 31
/// values, and anything else in a `%K` line is a format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    /// Dependent on base used for sequence.
    Base,
    /// Sequence is too short to do any analysis with.
    Bref,
    /// Sequence changed in the last two weeks (set automatically).
    Changed,
    /// A continued fraction expansion of a number.
    Cofr,
    /// A decimal expansion of a number.
    Cons,
    /// An important sequence.
    Core,
    /// An erroneous sequence.
    Dead,
    /// An unimportant sequence.
    Dumb,
    /// Duplicate of another sequence.
    Dupe,
    /// It is very easy to produce terms of the sequence.
    Easy,
    /// An eigensequence: a fixed sequence for some transformation.
    Eigen,
    /// A finite sequence.
    Fini,
    /// Numerators or denominators of a sequence of rationals.
    Frac,
    /// The full sequence is given.
    Full,
    /// Next term not known, may be hard to find.
    Hard,
    /// Worth listening to.
    Hear,
    /// Just look at this sequence, interesting graph.
    Look,
    /// Reluctantly accepted.
    Less,
    /// More terms are needed.
    More,
    /// Multiplicative: a(mn) = a(m)a(n) if gcd(m,n) = 1.
    Mult,
    /// New (added within the last two weeks, roughly).
    New,
    /// An exceptionally nice sequence.
    Nice,
    /// A sequence of nonnegative numbers.
    Nonn,
    /// Obscure, better description needed.
    Obsc,
    /// Included on a provisional basis, may be deleted later.
    Probation,
    /// Sequence contains negative numbers.
    Sign,
    /// An irregular (or funny-shaped) array read by rows.
    Tabf,
    /// A regular table, typically a triangle, read by rows.
    Tabl,
    /// Not edited, so may contain basic errors.
    Uned,
    /// Counts walks (or self-avoiding paths).
    Walk,
    /// Depends on words for the sequence in some language.
    Word,
}

/// Total number of keywords. Used for compile-time assertions.
pub const KEYWORD_COUNT: usize = 31;

impl Keyword {
    /// Returns all 31 keywords in canonical declaration order.
    pub fn all() -> &'static [Keyword] {
        &[
            Self::Base,
            Self::Bref,
            Self::Changed,
            Self::Cofr,
            Self::Cons,
            Self::Core,
            Self::Dead,
            Self::Dumb,
            Self::Dupe,
            Self::Easy,
            Self::Eigen,
            Self::Fini,
            Self::Frac,
            Self::Full,
            Self::Hard,
            Self::Hear,
            Self::Look,
            Self::Less,
            Self::More,
            Self::Mult,
            Self::New,
            Self::Nice,
            Self::Nonn,
            Self::Obsc,
            Self::Probation,
            Self::Sign,
            Self::Tabf,
            Self::Tabl,
            Self::Uned,
            Self::Walk,
            Self::Word,
        ]
    }

    /// Returns the canonical lowercase string for this keyword.
    ///
    /// This must match the serde serialization format and the spelling used
    /// in `%K` lines of the internal record format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Bref => "bref",
            Self::Changed => "changed",
            Self::Cofr => "cofr",
            Self::Cons => "cons",
            Self::Core => "core",
            Self::Dead => "dead",
            Self::Dumb => "dumb",
            Self::Dupe => "dupe",
            Self::Easy => "easy",
            Self::Eigen => "eigen",
            Self::Fini => "fini",
            Self::Frac => "frac",
            Self::Full => "full",
            Self::Hard => "hard",
            Self::Hear => "hear",
            Self::Look => "look",
            Self::Less => "less",
            Self::More => "more",
            Self::Mult => "mult",
            Self::New => "new",
            Self::Nice => "nice",
            Self::Nonn => "nonn",
            Self::Obsc => "obsc",
            Self::Probation => "probation",
            Self::Sign => "sign",
            Self::Tabf => "tabf",
            Self::Tabl => "tabl",
            Self::Uned => "uned",
            Self::Walk => "walk",
            Self::Word => "word",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = UnknownKeywordError;

    /// Parse a keyword from its string form, case-insensitively.
    ///
    /// Accepts any casing of the identifiers produced by
    /// [`Keyword::as_str()`]; the input is ASCII-lowercased before lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "bref" => Ok(Self::Bref),
            "changed" => Ok(Self::Changed),
            "cofr" => Ok(Self::Cofr),
            "cons" => Ok(Self::Cons),
            "core" => Ok(Self::Core),
            "dead" => Ok(Self::Dead),
            "dumb" => Ok(Self::Dumb),
            "dupe" => Ok(Self::Dupe),
            "easy" => Ok(Self::Easy),
            "eigen" => Ok(Self::Eigen),
            "fini" => Ok(Self::Fini),
            "frac" => Ok(Self::Frac),
            "full" => Ok(Self::Full),
            "hard" => Ok(Self::Hard),
            "hear" => Ok(Self::Hear),
            "look" => Ok(Self::Look),
            "less" => Ok(Self::Less),
            "more" => Ok(Self::More),
            "mult" => Ok(Self::Mult),
            "new" => Ok(Self::New),
            "nice" => Ok(Self::Nice),
            "nonn" => Ok(Self::Nonn),
            "obsc" => Ok(Self::Obsc),
            "probation" => Ok(Self::Probation),
            "sign" => Ok(Self::Sign),
            "tabf" => Ok(Self::Tabf),
            "tabl" => Ok(Self::Tabl),
            "uned" => Ok(Self::Uned),
            "walk" => Ok(Self::Walk),
            "word" => Ok(Self::Word),
            _ => Err(UnknownKeywordError {
                token: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keywords_count() {
        assert_eq!(Keyword::all().len(), KEYWORD_COUNT);
        assert_eq!(Keyword::all().len(), 31);
    }

    #[test]
    fn test_all_keywords_unique() {
        let mut seen = std::collections::HashSet::new();
        for kw in Keyword::all() {
            assert!(seen.insert(kw), "Duplicate keyword: {kw}");
        }
    }

    #[test]
    fn test_as_str_lowercase() {
        for kw in Keyword::all() {
            let s = kw.as_str();
            assert_eq!(s, s.to_ascii_lowercase(), "{kw:?} is not lowercase");
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for kw in Keyword::all() {
            let s = kw.as_str();
            let parsed: Keyword = s
                .parse()
                .unwrap_or_else(|e| panic!("Failed to parse {s:?}: {e}"));
            assert_eq!(*kw, parsed);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("BAse".parse::<Keyword>(), "base".parse::<Keyword>());
        assert_eq!("NONN".parse::<Keyword>().unwrap(), Keyword::Nonn);
        assert_eq!("Probation".parse::<Keyword>().unwrap(), Keyword::Probation);
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "nonexistent".parse::<Keyword>().unwrap_err();
        assert_eq!(err.token, "nonexistent");
        assert!("".parse::<Keyword>().is_err());
        assert!(" base".parse::<Keyword>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        for kw in Keyword::all() {
            let json = serde_json::to_string(kw).unwrap();
            assert_eq!(json, format!("\"{}\"", kw.as_str()));
            let parsed: Keyword = serde_json::from_str(&json).unwrap();
            assert_eq!(*kw, parsed);
        }
    }
}
