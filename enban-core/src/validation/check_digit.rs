//! ISO/IEC 7064 MOD 97-10 check digits
//!
//! The check string is the account number followed by the country code and
//! the check digit (`00` when computing). Letters expand to two decimal
//! digits (`A` = 10 .. `Z` = 35) and the resulting number is reduced
//! modulo 97 digit by digit, so no big integer is ever built.

use crate::format::constants::COUNTRY_CODE_LENGTH;
use crate::{EnbanError, Result};
use alloc::format;

const MODULUS: u32 = 97;

/// Two-digit IBAN check digit, always in `0..=99`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// Largest representable check digit
    pub const MAX: u8 = 99;

    /// Create a check digit, rejecting values above 99
    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(EnbanError::CheckDigitOutOfRange(value as u32));
        }
        Ok(Self(value))
    }

    /// Get the numeric value
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Build a check digit from two ASCII digit characters
    pub fn from_digits(tens: char, ones: char) -> Option<Self> {
        let tens = tens.to_digit(10)?;
        let ones = ones.to_digit(10)?;
        Some(Self((tens * 10 + ones) as u8))
    }
}

impl TryFrom<u8> for CheckDigit {
    type Error = EnbanError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<u32> for CheckDigit {
    type Error = EnbanError;

    fn try_from(value: u32) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| EnbanError::CheckDigitOutOfRange(value))
            .and_then(Self::new)
    }
}

impl From<CheckDigit> for u8 {
    fn from(check_digit: CheckDigit) -> Self {
        check_digit.0
    }
}

impl core::str::FromStr for CheckDigit {
    type Err = EnbanError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(tens), Some(ones), None) => Self::from_digits(tens, ones).ok_or_else(|| {
                EnbanError::MalformedInput(format!("check digit '{s}' is not two decimal digits"))
            }),
            _ => Err(EnbanError::MalformedInput(format!(
                "check digit '{s}' is not two decimal digits"
            ))),
        }
    }
}

impl core::fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Compute the check digit for a country code and account number
pub fn compute(country_code: &str, account_number: &str) -> Result<CheckDigit> {
    let remainder = rearranged_remainder(country_code, account_number)?;

    // Append the "00" placeholder; the result is always in 2..=98
    let remainder = remainder * 100 % MODULUS;
    Ok(CheckDigit((98 - remainder) as u8))
}

/// Check whether `check_digit` is correct for a country code and account number
pub fn is_valid(country_code: &str, account_number: &str, check_digit: CheckDigit) -> Result<bool> {
    let remainder = rearranged_remainder(country_code, account_number)?;

    Ok((remainder * 100 + check_digit.0 as u32) % MODULUS == 1)
}

/// Remainder of `account_number + country_code`, before the check digit
fn rearranged_remainder(country_code: &str, account_number: &str) -> Result<u32> {
    if country_code.chars().count() != COUNTRY_CODE_LENGTH {
        return Err(EnbanError::MalformedInput(format!(
            "country code '{country_code}' must have exactly {COUNTRY_CODE_LENGTH} characters"
        )));
    }

    if account_number.is_empty() {
        return Err(EnbanError::MalformedInput("account number is empty".into()));
    }

    let remainder = reduce(0, account_number)?;
    reduce(remainder, country_code)
}

/// Continue a modulo 97 reduction over `text` using Horner's rule
fn reduce(mut remainder: u32, text: &str) -> Result<u32> {
    for c in text.chars() {
        remainder = match c {
            '0'..='9' => (remainder * 10 + (c as u32 - '0' as u32)) % MODULUS,
            // Letters stand for two decimal digits
            'A'..='Z' => (remainder * 100 + (c as u32 - 'A' as u32 + 10)) % MODULUS,
            _ => {
                return Err(EnbanError::MalformedInput(format!(
                    "invalid character '{c}' (expected: 0-9 or A-Z)"
                )))
            }
        };
    }

    Ok(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cd(value: u8) -> CheckDigit {
        CheckDigit::new(value).unwrap()
    }

    #[test]
    fn test_compute() {
        assert_eq!(compute("DE", "210501700012345678"), Ok(cd(68)));
        assert_eq!(compute("DE", "370400440532013000"), Ok(cd(89)));
        assert_eq!(compute("GI", "NWBK000000007099453"), Ok(cd(75)));
        assert_eq!(compute("LU", "0019400644750000"), Ok(cd(28)));
        // Leading zero
        assert_eq!(compute("XK", "1212012345678906"), Ok(cd(5)));
        assert_eq!(compute("AE", "0331234567890123456"), Ok(cd(7)));
    }

    #[test]
    fn test_is_valid() {
        assert_eq!(is_valid("DE", "210501700012345678", cd(68)), Ok(true));
        assert_eq!(is_valid("DE", "210501709012345678", cd(68)), Ok(false));
        assert_eq!(is_valid("AE", "0331234567890123456", cd(7)), Ok(true));
        assert_eq!(is_valid("BR", "00360305000010009795493C1", cd(18)), Ok(true));
        assert_eq!(is_valid("XK", "1212012345678906", cd(5)), Ok(true));
        assert_eq!(is_valid("XK", "1212012345678906", cd(50)), Ok(false));
    }

    #[test]
    fn test_invalid_operands() {
        assert!(matches!(
            compute("D", "210501700012345678"),
            Err(EnbanError::MalformedInput(_))
        ));
        assert!(matches!(
            compute("DEU", "210501700012345678"),
            Err(EnbanError::MalformedInput(_))
        ));
        assert!(matches!(compute("DE", ""), Err(EnbanError::MalformedInput(_))));
        assert!(matches!(
            is_valid("DE", "2105-01700012345678", cd(68)),
            Err(EnbanError::MalformedInput(_))
        ));
        // Lower case letters are not part of the check alphabet
        assert!(matches!(
            compute("GI", "nwbk000000007099453"),
            Err(EnbanError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_single_digit_changes_are_detected() {
        let account = "370400440532013000";
        let check_digit = compute("DE", account).unwrap();

        for (i, original) in account.char_indices() {
            for replacement in '0'..='9' {
                if replacement == original {
                    continue;
                }
                let mut mutated = alloc::string::String::from(account);
                mutated.replace_range(i..i + 1, replacement.encode_utf8(&mut [0; 4]));
                assert_eq!(is_valid("DE", &mutated, check_digit), Ok(false));
            }
        }
    }

    #[test]
    fn test_check_digit_value() {
        assert_eq!(cd(5).to_string(), "05");
        assert_eq!(cd(89).to_string(), "89");
        assert_eq!(CheckDigit::new(100), Err(EnbanError::CheckDigitOutOfRange(100)));
        assert_eq!(CheckDigit::try_from(300u32), Err(EnbanError::CheckDigitOutOfRange(300)));
        assert_eq!(CheckDigit::try_from(42u32), Ok(cd(42)));
        assert_eq!("07".parse::<CheckDigit>(), Ok(cd(7)));
        assert!("7".parse::<CheckDigit>().is_err());
        assert!("7a".parse::<CheckDigit>().is_err());
        assert!("100".parse::<CheckDigit>().is_err());
        assert_eq!(u8::from(cd(42)), 42);
    }
}
