//! Configurable BIC parsing and formatting

use crate::bic::{Bic, BicFormat};
use crate::countries::KnownCountryCodes;
use enban_core::format::constants::bic::{COMPACT_LENGTH, FULL_LENGTH, PRIMARY_OFFICE_BRANCH_CODE};
use enban_core::{BicStyles, CountryCodeSet, EnbanError, Pattern, Result};
use log::{debug, trace};
use std::fmt;
use std::sync::Arc;

/// Shared, read-only set of accepted country codes
pub type SharedCountryCodes = Arc<dyn CountryCodeSet + Send + Sync>;

/// Parse styles, output layout and accepted countries bundled together
#[derive(Clone)]
pub struct BicPattern {
    styles: BicStyles,
    format: BicFormat,
    known: SharedCountryCodes,
}

impl BicPattern {
    pub fn new(styles: BicStyles, format: BicFormat, known: SharedCountryCodes) -> Self {
        Self {
            styles,
            format,
            known,
        }
    }

    /// Strict compact form over the built-in country list
    pub fn compact() -> Self {
        Self::new(BicStyles::COMPACT, BicFormat::Compact, KnownCountryCodes::builtin())
    }

    /// Strict full form over the built-in country list
    pub fn full() -> Self {
        Self::new(BicStyles::FULL, BicFormat::Full, KnownCountryCodes::builtin())
    }

    /// Strict compact form accepting only `codes` (case-insensitive)
    pub fn create_compact<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known = Arc::new(KnownCountryCodes::from_codes(codes));
        Self::new(BicStyles::COMPACT, BicFormat::Compact, known)
    }

    /// Strict full form accepting only `codes` (case-insensitive)
    pub fn create_full<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known = Arc::new(KnownCountryCodes::from_codes(codes));
        Self::new(BicStyles::FULL, BicFormat::Full, known)
    }

    pub fn with_styles(mut self, styles: BicStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_format(mut self, format: BicFormat) -> Self {
        self.format = format;
        self
    }

    pub fn styles(&self) -> BicStyles {
        self.styles
    }

    pub fn output_format(&self) -> BicFormat {
        self.format
    }

    fn parse_normalized(&self, normalized: &str) -> Result<Bic> {
        if normalized.trim().is_empty() {
            return Err(EnbanError::MalformedInput("BIC text is empty or blank".into()));
        }

        let chars: Vec<char> = normalized.chars().collect();
        if chars.len() != COMPACT_LENGTH && chars.len() != FULL_LENGTH {
            return Err(EnbanError::MalformedInput(format!(
                "'{normalized}' has wrong length (expected: {COMPACT_LENGTH} or {FULL_LENGTH}, actual: {})",
                chars.len()
            )));
        }

        let field = |start: usize, end: usize| chars[start..end].iter().collect::<String>();

        let branch_code = if chars.len() == COMPACT_LENGTH {
            if self.styles.contains(BicStyles::REQUIRE_PRIMARY_OFFICE_BRANCH_CODE) {
                return Err(EnbanError::InvalidBranchCode(format!(
                    "'{normalized}' has no branch code, {PRIMARY_OFFICE_BRANCH_CODE} is required"
                )));
            }
            None
        } else {
            let branch_code = field(COMPACT_LENGTH, FULL_LENGTH);
            if branch_code == PRIMARY_OFFICE_BRANCH_CODE
                && self.styles.contains(BicStyles::DISALLOW_PRIMARY_OFFICE_BRANCH_CODE)
            {
                return Err(EnbanError::InvalidBranchCode(format!(
                    "'{normalized}' spells out {PRIMARY_OFFICE_BRANCH_CODE}, which is not allowed"
                )));
            }
            Some(branch_code)
        };

        let institution_code = field(0, 4);
        let country_code = field(4, 6);
        let location_code = field(6, COMPACT_LENGTH);

        Bic::with_known_codes(
            self.known.as_ref(),
            &institution_code,
            &country_code,
            &location_code,
            branch_code.as_deref(),
        )
    }
}

impl Pattern<Bic> for BicPattern {
    fn format(&self, value: &Bic) -> String {
        self.format.apply(value)
    }

    fn parse(&self, text: &str) -> Result<Bic> {
        let normalized = self.styles.normalize(text);

        match self.parse_normalized(&normalized) {
            Ok(bic) => {
                trace!("parsed BIC {bic:#}");
                Ok(bic)
            }
            Err(err) => {
                debug!("rejected BIC {text:?}: {err}");
                Err(err)
            }
        }
    }
}

impl fmt::Debug for BicPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BicPattern")
            .field("styles", &self.styles)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact() {
        let pattern = BicPattern::compact();
        let bic = pattern.parse("DRESDEFF").unwrap();
        assert_eq!(pattern.format(&bic), "DRESDEFF");
        assert!(pattern.parse("DRESDEFF370").is_ok());
        assert!(matches!(
            pattern.parse("DRESDEFFXXX"),
            Err(EnbanError::InvalidBranchCode(_))
        ));
    }

    #[test]
    fn test_full() {
        let pattern = BicPattern::full();
        let bic = pattern.parse("DRESDEFFXXX").unwrap();
        assert_eq!(pattern.format(&bic), "DRESDEFFXXX");
        assert!(matches!(
            pattern.parse("DRESDEFF"),
            Err(EnbanError::InvalidBranchCode(_))
        ));
    }

    #[test]
    fn test_lenient() {
        let pattern = BicPattern::compact().with_styles(BicStyles::LENIENT);
        assert!(pattern.parse("DRESDEFFXXX").is_ok());
        assert!(pattern.parse("DRESDEFF").is_ok());
        assert!(pattern.parse("  dresdeff370\t").is_ok());
        // Intermediate white space is never accepted
        assert!(matches!(
            pattern.parse("DRES DEFF 370"),
            Err(EnbanError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_rejected() {
        let pattern = BicPattern::compact().with_styles(BicStyles::LENIENT);

        assert!(matches!(pattern.parse(""), Err(EnbanError::MalformedInput(_))));
        assert!(matches!(pattern.parse("        "), Err(EnbanError::MalformedInput(_))));
        assert!(matches!(pattern.parse("DRESDEFF37"), Err(EnbanError::MalformedInput(_))));
        assert!(matches!(pattern.parse("DRESDEFF3700"), Err(EnbanError::MalformedInput(_))));
        assert!(matches!(
            pattern.parse("_%&$DEFF370"),
            Err(EnbanError::InvalidInstitutionCode(_))
        ));
        assert!(matches!(
            pattern.parse("DRES99FF370"),
            Err(EnbanError::InvalidCountryCode(_))
        ));
        assert!(matches!(
            pattern.parse("DRESZZFF370"),
            Err(EnbanError::InvalidCountryCode(_))
        ));
        assert!(matches!(
            pattern.parse("DRESDE_%370"),
            Err(EnbanError::InvalidLocationCode(_))
        ));
        assert!(matches!(
            pattern.parse("DRESDEFO370"),
            Err(EnbanError::InvalidLocationCode(_))
        ));
        assert!(matches!(
            pattern.parse("DRESDEFFXYZ"),
            Err(EnbanError::InvalidBranchCode(_))
        ));
        assert!(matches!(
            pattern.parse("DRESDEFF_%$"),
            Err(EnbanError::InvalidBranchCode(_))
        ));
    }

    #[test]
    fn test_strict_case() {
        assert!(matches!(
            BicPattern::compact().parse("dresdeff"),
            Err(EnbanError::InvalidInstitutionCode(_))
        ));
        assert!(matches!(
            BicPattern::compact().parse(" DRESDEFF"),
            Err(EnbanError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_custom_country_codes() {
        let pattern = BicPattern::create_compact(["de", "AT"]);
        assert!(pattern.parse("DRESDEFF").is_ok());
        assert!(pattern.parse("BKAUATWW").is_ok());
        assert!(matches!(
            pattern.parse("UBSWCHZH80A"),
            Err(EnbanError::InvalidCountryCode(_))
        ));

        let pattern = BicPattern::create_full(["CH"]);
        assert!(pattern.parse("UBSWCHZH80A").is_ok());
        assert!(pattern.parse("DRESDEFFXXX").is_err());
    }

    #[test]
    fn test_round_trip() {
        let lenient = BicPattern::compact().with_styles(BicStyles::LENIENT);
        for text in ["DRESDEFF", "DRESDEFFXXX", "DRESDEFF370", "UBSWCHZH80A", "1234DE12"] {
            let bic = lenient.parse(text).unwrap();
            let full = BicPattern::full().format(&bic);
            assert_eq!(lenient.parse(&full), Ok(bic.clone()));

            let compact = BicPattern::compact().format(&bic);
            assert_eq!(lenient.parse(&compact), Ok(bic));
        }
    }
}
