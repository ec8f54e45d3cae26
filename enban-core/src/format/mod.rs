//! Structure and style definitions for IBAN, BBAN and BIC text
//!
//! This module contains pure data definitions. No I/O and no lookups,
//! only the vocabulary used by the validation functions.

pub mod constants;
pub mod segment;
pub mod styles;

// Re-export format definitions
pub use segment::{CharacterClass, LengthIndication, Segment};
pub use styles::{BicStyles, IbanStyles};
