//! Basic Bank Account Numbers

use crate::countries::CountryAccountPatterns;
use crate::iban::Iban;
use enban_core::validation::{check_digit, is_full_match};
use enban_core::{AccountPatterns, CheckDigit, EnbanError, Result};
use std::fmt;

/// A country code together with an account number that matches the
/// country's BBAN structure
///
/// The country code is stored in upper case. The account number is kept
/// exactly as given; it is not upper cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bban {
    country_code: String,
    account_number: String,
}

impl Bban {
    /// Validate against the built-in country registry
    pub fn new(country_code: &str, account_number: &str) -> Result<Self> {
        Self::with_patterns(CountryAccountPatterns::builtin().as_ref(), country_code, account_number)
    }

    /// Validate against a caller supplied registry
    pub fn with_patterns<P>(patterns: &P, country_code: &str, account_number: &str) -> Result<Self>
    where
        P: AccountPatterns + ?Sized,
    {
        if country_code.is_empty() {
            return Err(EnbanError::MalformedInput("country code is empty".into()));
        }
        if account_number.is_empty() {
            return Err(EnbanError::MalformedInput("account number is empty".into()));
        }

        let country_code = country_code.to_ascii_uppercase();
        let segments = patterns
            .segments(&country_code)
            .ok_or_else(|| EnbanError::UnknownCountryCode(country_code.clone()))?;

        let chars: Vec<char> = account_number.chars().collect();
        if !is_full_match(segments, &chars) {
            return Err(EnbanError::SegmentMismatch {
                country_code,
                account_number: account_number.to_string(),
            });
        }

        Ok(Self {
            country_code,
            account_number: account_number.to_string(),
        })
    }

    /// Assemble from parts that were already matched
    pub(crate) fn from_parts_unchecked(country_code: String, account_number: String) -> Self {
        Self {
            country_code,
            account_number,
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Compute the check digit and build the IBAN
    ///
    /// Fails with [`EnbanError::MalformedInput`] when the account number
    /// holds characters outside `0-9A-Z` (a lower case letter matched by an
    /// `a` or `c` segment, say).
    pub fn to_iban(&self) -> Result<Iban> {
        let check_digit = check_digit::compute(&self.country_code, &self.account_number)?;
        Ok(self.to_iban_with(check_digit))
    }

    /// Build an IBAN with an explicit, unverified check digit
    pub fn to_iban_with(&self, check_digit: CheckDigit) -> Iban {
        Iban::from_bban(self.clone(), check_digit)
    }
}

impl fmt::Display for Bban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.account_number)
    }
}
