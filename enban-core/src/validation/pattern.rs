//! Compiler for the BBAN structure pattern mini-language
//!
//! A pattern is one or more `<count><'!'?><class>` groups, for example
//! `8!n10!n` (eight digits, then ten digits) or `4!a24!c`. The count is a
//! positive decimal, `!` marks a fixed length, and the class is one of
//! `n`, `a`, `c` or `e`.

use crate::format::{CharacterClass, LengthIndication, Segment};
use crate::{EnbanError, Result};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Compile a pattern text into its ordered segments
///
/// The whole text must be consumed; trailing or unknown characters fail
/// the compile.
pub fn compile(pattern_text: &str) -> Result<Vec<Segment>> {
    if pattern_text.is_empty() {
        return Err(invalid(pattern_text, "pattern is empty"));
    }

    let bytes = pattern_text.as_bytes();
    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let (count, next) = parse_count(pattern_text, pos)?;
        pos = next;

        let fixed = bytes.get(pos) == Some(&b'!');
        if fixed {
            pos += 1;
        }

        let symbol = pattern_text[pos..]
            .chars()
            .next()
            .ok_or_else(|| invalid(pattern_text, "missing character class"))?;
        let class = CharacterClass::from_symbol(symbol)
            .ok_or_else(|| invalid(pattern_text, "unknown character class"))?;
        pos += symbol.len_utf8();

        let length = if fixed {
            LengthIndication::Fixed(count)
        } else {
            LengthIndication::Maximum(count)
        };
        segments.push(Segment::new(class, length)?);
    }

    Ok(segments)
}

/// Render segments back into pattern text
///
/// `compile(&to_pattern_text(s)) == Ok(s)` for every compiled segment list.
pub fn to_pattern_text(segments: &[Segment]) -> String {
    segments.iter().map(ToString::to_string).collect()
}

/// Sum of the declared segment lengths
pub fn total_length(segments: &[Segment]) -> usize {
    segments.iter().map(Segment::len).sum()
}

/// Parse the decimal count starting at `start`
///
/// Returns the count and the position after its last digit.
fn parse_count(pattern_text: &str, start: usize) -> Result<(u16, usize)> {
    let bytes = pattern_text.as_bytes();
    let mut pos = start;
    let mut result: u16 = 0;

    while let Some(byte) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        let digit = (byte - b'0') as u16;

        if pos == start && digit == 0 {
            return Err(invalid(pattern_text, "count must start with a non-zero digit"));
        }

        // Check for overflow
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or_else(|| invalid(pattern_text, "count is too large"))?;
        pos += 1;
    }

    if pos == start {
        return Err(invalid(pattern_text, "missing count"));
    }

    Ok((result, pos))
}

fn invalid(pattern_text: &str, reason: &'static str) -> EnbanError {
    EnbanError::InvalidPattern {
        pattern: pattern_text.to_string(),
        reason,
    }
}
