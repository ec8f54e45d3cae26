//! Error types for Enban operations

use alloc::string::String;
use thiserror::Error;

/// Errors that can occur while compiling patterns, computing check digits,
/// or parsing and constructing account numbers and business identifier codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnbanError {
    /// Input has the wrong overall length or shape
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A structure pattern such as `8!n10!n` could not be compiled
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    /// No account pattern is registered for the country code
    #[error("unknown country code: {0}")]
    UnknownCountryCode(String),

    /// Account number violates the structure pattern of its country
    #[error("account number '{account_number}' does not match the structure of country {country_code}")]
    SegmentMismatch {
        country_code: String,
        account_number: String,
    },

    /// MOD 97-10 validation of the check digit failed
    #[error("invalid check digit {check_digit:02} for country {country_code}")]
    InvalidCheckDigit { country_code: String, check_digit: u8 },

    /// Check digit outside of `0..=99`
    #[error("check digit out of range (expected: 0..=99, actual: {0})")]
    CheckDigitOutOfRange(u32),

    /// BIC institution code is not four letters or digits
    #[error("invalid institution code: {0}")]
    InvalidInstitutionCode(String),

    /// BIC country code is not two letters or not a known country
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),

    /// BIC location code is malformed
    #[error("invalid location code: {0}")]
    InvalidLocationCode(String),

    /// BIC branch code is malformed, or its presence violates the parse style
    #[error("invalid branch code: {0}")]
    InvalidBranchCode(String),

    /// A country pattern was registered twice
    #[error("duplicate country code: {0}")]
    DuplicateCountryCode(String),
}

/// Result type for Enban operations
pub type Result<T> = core::result::Result<T, EnbanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_messages() {
        let err = EnbanError::InvalidCheckDigit {
            country_code: "XK".to_string(),
            check_digit: 5,
        };
        assert_eq!(err.to_string(), "invalid check digit 05 for country XK");

        let err = EnbanError::InvalidPattern {
            pattern: "8!x".to_string(),
            reason: "unknown character class",
        };
        assert_eq!(
            err.to_string(),
            "invalid pattern '8!x': unknown character class"
        );

        assert_eq!(
            EnbanError::CheckDigitOutOfRange(100).to_string(),
            "check digit out of range (expected: 0..=99, actual: 100)"
        );
    }
}
