//! Parse style flags for IBAN and BIC text
//!
//! Each flag relaxes (or for BIC, tightens) one rule. Presets such as
//! `LENIENT` are plain combinations of the individual flags.

use crate::validation::text::trim_whitespace;
use alloc::string::String;
use bitflags::bitflags;

bitflags! {
    /// Flags controlling how IBAN text is accepted
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IbanStyles: u8 {
        /// Accept lower case letters
        const IGNORE_CASE = 1 << 3;
        /// Allow leading white space
        const ALLOW_LEADING_WHITE = 1 << 4;
        /// Allow trailing white space
        const ALLOW_TRAILING_WHITE = 1 << 5;
        /// Allow white space between characters, as in the print form
        const ALLOW_INTERMEDIATE_WHITE = 1 << 6;
        /// Accept IBANs whose check digit does not validate
        const ALLOW_INVALID_CHECK_DIGIT = 1 << 7;

        /// As forgiving as possible
        const LENIENT = Self::IGNORE_CASE.bits()
            | Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_INTERMEDIATE_WHITE.bits()
            | Self::ALLOW_INVALID_CHECK_DIGIT.bits();
        /// Space separated groups of four characters
        const PRINT = Self::ALLOW_INTERMEDIATE_WHITE.bits();
    }
}

impl IbanStyles {
    /// Strict electronic form: no white space, upper case, valid check digit
    pub const ELECTRONIC: Self = Self::empty();

    /// Apply case and white space normalization
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = trim_whitespace(
            text,
            self.contains(Self::ALLOW_LEADING_WHITE),
            self.contains(Self::ALLOW_INTERMEDIATE_WHITE),
            self.contains(Self::ALLOW_TRAILING_WHITE),
        );

        if self.contains(Self::IGNORE_CASE) {
            normalized.make_ascii_uppercase();
        }

        normalized
    }
}

bitflags! {
    /// Flags controlling how BIC text is accepted
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BicStyles: u8 {
        /// Reject eleven character BICs ending in the primary office code `XXX`
        const DISALLOW_PRIMARY_OFFICE_BRANCH_CODE = 1 << 0;
        /// Reject eight character BICs (the branch code must be spelled out)
        const REQUIRE_PRIMARY_OFFICE_BRANCH_CODE = 1 << 1;
        /// Accept lower case letters
        const IGNORE_CASE = 1 << 3;
        /// Allow leading white space
        const ALLOW_LEADING_WHITE = 1 << 4;
        /// Allow trailing white space
        const ALLOW_TRAILING_WHITE = 1 << 5;

        /// Case-insensitive, surrounding white space, either branch code form
        const LENIENT = Self::IGNORE_CASE.bits()
            | Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits();
        /// Strict compact form, no `XXX` branch code
        const COMPACT = Self::DISALLOW_PRIMARY_OFFICE_BRANCH_CODE.bits();
        /// Strict full form, branch code always present
        const FULL = Self::REQUIRE_PRIMARY_OFFICE_BRANCH_CODE.bits();
    }
}

impl BicStyles {
    /// Apply case and white space normalization
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = trim_whitespace(
            text,
            self.contains(Self::ALLOW_LEADING_WHITE),
            false,
            self.contains(Self::ALLOW_TRAILING_WHITE),
        );

        if self.contains(Self::IGNORE_CASE) {
            normalized.make_ascii_uppercase();
        }

        normalized
    }
}
