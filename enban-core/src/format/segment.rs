//! Building blocks of BBAN structure patterns
//!
//! A structure pattern like `4!a6!n8!n` is an ordered list of segments, each
//! one a character class paired with a length indication.

use crate::{EnbanError, Result};
use alloc::string::ToString;

/// Allowed alphabet of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterClass {
    /// `0`-`9`, pattern symbol `n`
    Digits,
    /// `A`-`Z`, pattern symbol `a`
    UpperCaseLetters,
    /// `0`-`9`, `A`-`Z` and `a`-`z`, pattern symbol `c`
    AlphanumericCharacters,
    /// A single space, pattern symbol `e`
    BlankSpace,
}

impl CharacterClass {
    /// Check whether a character belongs to this class
    pub const fn contains(&self, c: char) -> bool {
        match self {
            CharacterClass::Digits => c.is_ascii_digit(),
            CharacterClass::UpperCaseLetters => c.is_ascii_uppercase(),
            CharacterClass::AlphanumericCharacters => c.is_ascii_alphanumeric(),
            CharacterClass::BlankSpace => c == ' ',
        }
    }

    /// Get the pattern symbol for this class
    pub const fn symbol(&self) -> char {
        match self {
            CharacterClass::Digits => 'n',
            CharacterClass::UpperCaseLetters => 'a',
            CharacterClass::AlphanumericCharacters => 'c',
            CharacterClass::BlankSpace => 'e',
        }
    }

    /// Look up a class by its pattern symbol
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'n' => Some(CharacterClass::Digits),
            'a' => Some(CharacterClass::UpperCaseLetters),
            'c' => Some(CharacterClass::AlphanumericCharacters),
            'e' => Some(CharacterClass::BlankSpace),
            _ => None,
        }
    }
}

impl core::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CharacterClass::Digits => write!(f, "digits"),
            CharacterClass::UpperCaseLetters => write!(f, "upper case letters"),
            CharacterClass::AlphanumericCharacters => write!(f, "alphanumeric characters"),
            CharacterClass::BlankSpace => write!(f, "blank space"),
        }
    }
}

/// Declared length of a segment
///
/// `Fixed` is written with a trailing `!` in patterns (`4!n`), `Maximum`
/// without (`4n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthIndication {
    /// Exactly this many characters
    Fixed(u16),
    /// Up to this many characters
    Maximum(u16),
}

impl LengthIndication {
    /// Get the declared character count
    pub const fn len(&self) -> usize {
        match self {
            LengthIndication::Fixed(n) | LengthIndication::Maximum(n) => *n as usize,
        }
    }

    /// Whether the declared count is zero (never true for compiled patterns)
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the length is exact
    pub const fn is_fixed(&self) -> bool {
        matches!(self, LengthIndication::Fixed(_))
    }
}

/// One (character class, length) component of a structure pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SegmentParts"))]
pub struct Segment {
    character_class: CharacterClass,
    length: LengthIndication,
}

/// Unchecked wire form of a [`Segment`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SegmentParts {
    character_class: CharacterClass,
    length: LengthIndication,
}

#[cfg(feature = "serde")]
impl TryFrom<SegmentParts> for Segment {
    type Error = EnbanError;

    fn try_from(parts: SegmentParts) -> Result<Self> {
        Segment::new(parts.character_class, parts.length)
    }
}

impl Segment {
    /// Create a segment, rejecting zero lengths
    pub fn new(character_class: CharacterClass, length: LengthIndication) -> Result<Self> {
        let segment = Self {
            character_class,
            length,
        };

        if length.is_empty() {
            return Err(EnbanError::InvalidPattern {
                pattern: segment.to_string(),
                reason: "segment length must be at least 1",
            });
        }

        Ok(segment)
    }

    /// Get the character class
    pub const fn character_class(&self) -> CharacterClass {
        self.character_class
    }

    /// Get the length indication
    pub const fn length_indication(&self) -> LengthIndication {
        self.length
    }

    /// Get the declared character count
    pub const fn len(&self) -> usize {
        self.length.len()
    }

    /// Always false for a constructed segment
    pub const fn is_empty(&self) -> bool {
        self.length.is_empty()
    }
}

impl core::fmt::Display for Segment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let marker = if self.length.is_fixed() { "!" } else { "" };
        write!(f, "{}{}{}", self.len(), marker, self.character_class.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_class_contains() {
        assert!(CharacterClass::Digits.contains('0'));
        assert!(CharacterClass::Digits.contains('9'));
        assert!(!CharacterClass::Digits.contains('A'));

        assert!(CharacterClass::UpperCaseLetters.contains('Z'));
        assert!(!CharacterClass::UpperCaseLetters.contains('z'));
        assert!(!CharacterClass::UpperCaseLetters.contains('1'));

        // Alphanumeric accepts lower case as well
        assert!(CharacterClass::AlphanumericCharacters.contains('q'));
        assert!(CharacterClass::AlphanumericCharacters.contains('Q'));
        assert!(CharacterClass::AlphanumericCharacters.contains('7'));
        assert!(!CharacterClass::AlphanumericCharacters.contains('-'));
        assert!(!CharacterClass::AlphanumericCharacters.contains('é'));

        assert!(CharacterClass::BlankSpace.contains(' '));
        assert!(!CharacterClass::BlankSpace.contains('\t'));
    }

    #[test]
    fn test_symbols() {
        for class in [
            CharacterClass::Digits,
            CharacterClass::UpperCaseLetters,
            CharacterClass::AlphanumericCharacters,
            CharacterClass::BlankSpace,
        ] {
            assert_eq!(CharacterClass::from_symbol(class.symbol()), Some(class));
        }
        assert_eq!(CharacterClass::from_symbol('x'), None);
        assert_eq!(CharacterClass::from_symbol('N'), None);
    }

    #[test]
    fn test_segment_new() {
        let segment = Segment::new(CharacterClass::Digits, LengthIndication::Fixed(8)).unwrap();
        assert_eq!(segment.len(), 8);
        assert_eq!(segment.to_string(), "8!n");

        let segment =
            Segment::new(CharacterClass::AlphanumericCharacters, LengthIndication::Maximum(12))
                .unwrap();
        assert_eq!(segment.to_string(), "12c");

        assert_eq!(
            Segment::new(CharacterClass::Digits, LengthIndication::Fixed(0)),
            Err(EnbanError::InvalidPattern {
                pattern: "0!n".to_string(),
                reason: "segment length must be at least 1",
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_length() {
        let segment: Segment =
            serde_json::from_str(r#"{"character_class":"Digits","length":{"Fixed":8}}"#).unwrap();
        assert_eq!(segment.to_string(), "8!n");
        assert_eq!(
            serde_json::to_string(&segment).unwrap(),
            r#"{"character_class":"Digits","length":{"Fixed":8}}"#
        );

        // Zero lengths are rejected like in Segment::new
        for json in [
            r#"{"character_class":"Digits","length":{"Fixed":0}}"#,
            r#"{"character_class":"BlankSpace","length":{"Maximum":0}}"#,
        ] {
            let err = serde_json::from_str::<Segment>(json).unwrap_err();
            assert!(err.to_string().contains("segment length must be at least 1"), "{err}");
        }
    }
}
