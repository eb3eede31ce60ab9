//! # oeis-core — Foundational Types for the OEIS Record Toolkit
//!
//! This crate is the leaf of the workspace dependency graph. It defines the
//! vocabulary-level primitives that the record codec in `oeis-record` builds
//! on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Keyword` enum.** One definition, 31 variants, exhaustive
//!    `match` everywhere. Adding a keyword forces every consumer to handle
//!    it at compile time, and the declaration order is the canonical order.
//!
//! 2. **Init-free lookup.** `Keyword::all()` is a `'static` table and
//!    `Keyword::from_str` is a plain match — no lazily-built maps, nothing
//!    to synchronize, safe to share across threads.
//!
//! 3. **Validated, never wrapped.** A-numbers stay plain strings in record
//!    data (the parser must accept not-yet-valid input); validity is a
//!    question answered by [`is_valid_identity`], not a type.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod keyword;

// Re-export primary types for ergonomic imports.
pub use error::UnknownKeywordError;
pub use identity::is_valid_identity;
pub use keyword::{Keyword, KEYWORD_COUNT};
