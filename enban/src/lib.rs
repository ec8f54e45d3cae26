//! Enban - IBAN, BBAN and BIC validation, parsing and formatting
//!
//! This library validates and converts International Bank Account Numbers
//! (ISO 13616) and Business Identifier Codes (ISO 9362), backed by a
//! built-in registry of the BBAN structures of 75 countries.
//!
//! ## Architecture
//!
//! Enban separates the pure engines from their implementations:
//!
//! - **enban-core**: Pattern compiler, segment matcher, MOD 97-10 check
//!   digits, style flags and lookup traits (no I/O, `no_std`)
//! - **enban**: Country registries, value types, configurable patterns,
//!   batch validation and the `enban` command line tool
//!
//! ## Quick Start
//!
//! ```rust
//! use enban::{Bban, Bic, BicPattern, Iban, IbanPattern, IbanStyles, Pattern};
//!
//! fn example() -> enban::Result<()> {
//!     // Parse the print form and write it back out electronically
//!     let iban: Iban = "DE89 3704 0044 0532 0130 00".parse()?;
//!     assert_eq!(iban.to_string(), "DE89370400440532013000");
//!
//!     // Be forgiving about case and white space
//!     let iban = IbanPattern::print()
//!         .with_styles(IbanStyles::LENIENT)
//!         .parse(" lu28 0019 4006 4475 0000 ")?;
//!     assert_eq!(format!("{iban:#}"), "LU28 0019 4006 4475 0000");
//!
//!     // Compute the check digit for a domestic account number
//!     let iban = Bban::new("XK", "1212012345678906")?.to_iban()?;
//!     assert_eq!(iban.check_digit().value(), 5);
//!
//!     // BICs with and without branch code
//!     let bic = BicPattern::full().parse("DRESDEFFXXX")?;
//!     assert_eq!(bic, "DRESDEFF".parse::<Bic>()?);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Style flags**: case, white space and check digit leniency per parse
//! - **Custom registries**: any [`AccountPatterns`] or [`CountryCodeSet`]
//!   implementation can back a pattern
//! - **Batch validation**: parse large input lists on the rayon pool
//! - **serde** (default): IBANs and BICs serialize as strings
//! - **cli**: the `enban` binary

// Re-export core abstractions and engines
pub use enban_core::{
    // Lookup and pattern traits
    AccountPatterns, CountryCodeSet, Pattern,
    // Structure and style definitions
    BicStyles, CharacterClass, IbanStyles, LengthIndication, Segment,
    // Check digits
    CheckDigit,
    // Error handling
    EnbanError, Result,
};
pub use enban_core::validation;

// Implementation modules
pub mod batch;
pub mod bban;
pub mod bic;
pub mod bic_pattern;
pub mod countries;
pub mod iban;
pub mod iban_pattern;

pub use batch::{parse_all, BatchReport};
pub use bban::Bban;
pub use bic::{Bic, BicFormat};
pub use bic_pattern::{BicPattern, SharedCountryCodes};
pub use countries::{Country, CountryAccountPatterns, KnownCountryCodes};
pub use iban::{Iban, IbanFormat};
pub use iban_pattern::{IbanPattern, SharedAccountPatterns};
