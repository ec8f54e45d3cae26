//! Configurable IBAN parsing and formatting

use crate::bban::Bban;
use crate::countries::CountryAccountPatterns;
use crate::iban::{Iban, IbanFormat};
use enban_core::format::constants::{IBAN_MIN_LENGTH, IBAN_PREFIX_LENGTH};
use enban_core::validation::{check_digit, is_match};
use enban_core::{AccountPatterns, CheckDigit, EnbanError, IbanStyles, Pattern, Result};
use log::{debug, trace};
use std::fmt;
use std::sync::Arc;

/// Shared, read-only source of country structures
pub type SharedAccountPatterns = Arc<dyn AccountPatterns + Send + Sync>;

/// Parse styles, output layout and country registry bundled together
///
/// Patterns are immutable and cheap to clone; one instance can be shared
/// between threads.
#[derive(Clone)]
pub struct IbanPattern {
    styles: IbanStyles,
    format: IbanFormat,
    patterns: SharedAccountPatterns,
}

impl IbanPattern {
    pub fn new(styles: IbanStyles, format: IbanFormat, patterns: SharedAccountPatterns) -> Self {
        Self {
            styles,
            format,
            patterns,
        }
    }

    /// Strict electronic form over the built-in countries
    pub fn electronic() -> Self {
        Self::create_electronic(CountryAccountPatterns::builtin())
    }

    /// Print form over the built-in countries
    pub fn print() -> Self {
        Self::create_print(CountryAccountPatterns::builtin())
    }

    /// Strict electronic form over a custom registry
    pub fn create_electronic(patterns: SharedAccountPatterns) -> Self {
        Self::new(IbanStyles::ELECTRONIC, IbanFormat::Electronic, patterns)
    }

    /// Print form over a custom registry
    pub fn create_print(patterns: SharedAccountPatterns) -> Self {
        Self::new(IbanStyles::PRINT, IbanFormat::Print, patterns)
    }

    pub fn with_styles(mut self, styles: IbanStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_format(mut self, format: IbanFormat) -> Self {
        self.format = format;
        self
    }

    pub fn styles(&self) -> IbanStyles {
        self.styles
    }

    pub fn output_format(&self) -> IbanFormat {
        self.format
    }

    fn parse_normalized(&self, normalized: &str) -> Result<Iban> {
        let chars: Vec<char> = normalized.chars().collect();
        if chars.len() < IBAN_MIN_LENGTH {
            return Err(EnbanError::MalformedInput(format!(
                "'{normalized}' is too short (expected: at least {IBAN_MIN_LENGTH} characters, actual: {})",
                chars.len()
            )));
        }

        if !(chars[0].is_ascii_uppercase() && chars[1].is_ascii_uppercase()) {
            return Err(EnbanError::MalformedInput(format!(
                "'{normalized}' does not start with a two letter country code"
            )));
        }

        let check_digit = CheckDigit::from_digits(chars[2], chars[3]).ok_or_else(|| {
            EnbanError::MalformedInput(format!(
                "'{normalized}' has no two digit check digit after the country code"
            ))
        })?;

        let country_code: String = chars[..2].iter().collect();
        let segments = self
            .patterns
            .segments(&country_code)
            .ok_or_else(|| EnbanError::UnknownCountryCode(country_code.clone()))?;

        let account_number: String = chars[IBAN_PREFIX_LENGTH..].iter().collect();
        if !is_match(segments, &chars, IBAN_PREFIX_LENGTH, chars.len() - IBAN_PREFIX_LENGTH) {
            return Err(EnbanError::SegmentMismatch {
                country_code,
                account_number,
            });
        }

        if !self.styles.contains(IbanStyles::ALLOW_INVALID_CHECK_DIGIT)
            && !check_digit::is_valid(&country_code, &account_number, check_digit)?
        {
            return Err(EnbanError::InvalidCheckDigit {
                country_code,
                check_digit: check_digit.value(),
            });
        }

        let bban = Bban::from_parts_unchecked(country_code, account_number);
        Ok(Iban::from_bban(bban, check_digit))
    }
}

impl Pattern<Iban> for IbanPattern {
    fn format(&self, value: &Iban) -> String {
        self.format.apply(value)
    }

    fn parse(&self, text: &str) -> Result<Iban> {
        let normalized = self.styles.normalize(text);

        match self.parse_normalized(&normalized) {
            Ok(iban) => {
                trace!("parsed IBAN {iban}");
                Ok(iban)
            }
            Err(err) => {
                debug!("rejected IBAN {text:?}: {err}");
                Err(err)
            }
        }
    }
}

impl fmt::Debug for IbanPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IbanPattern")
            .field("styles", &self.styles)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
