//! Validation engines for account number structure and check digits
//!
//! This module contains pure functions with no I/O dependencies: the
//! pattern compiler, the segment matcher, the MOD 97-10 checksum and
//! white space normalization.

pub mod check_digit;
pub mod matcher;
pub mod pattern;
pub mod text;

pub use check_digit::CheckDigit;
pub use matcher::{is_full_match, is_match};
pub use pattern::{compile, to_pattern_text, total_length};
pub use text::{remove_whitespace, trim_whitespace};
