//! Business Identifier Codes (ISO 9362)

use crate::bic_pattern::BicPattern;
use crate::countries::KnownCountryCodes;
use enban_core::format::constants::bic::{
    BRANCH_CODE_LENGTH, INSTITUTION_CODE_LENGTH, LOCATION_CODE_LENGTH, PRIMARY_OFFICE_BRANCH_CODE,
};
use enban_core::{BicStyles, CountryCodeSet, EnbanError, Pattern, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Text layout of a BIC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BicFormat {
    /// Always eleven characters, `XXX` filled in for primary offices
    Full,
    /// Eight characters for primary offices, eleven otherwise
    #[default]
    Compact,
    /// Eight or eleven characters, as the value was constructed
    Original,
}

impl BicFormat {
    /// Render a BIC in this layout
    pub fn apply(&self, bic: &Bic) -> String {
        let branch = match self {
            Self::Full => Some(bic.branch_code()),
            Self::Compact if bic.is_primary_office() => None,
            Self::Compact => Some(bic.branch_code()),
            Self::Original => bic.explicit_branch_code(),
        };

        let mut text = String::with_capacity(11);
        text.push_str(&bic.institution_code);
        text.push_str(&bic.country_code);
        text.push_str(&bic.location_code);
        if let Some(branch) = branch {
            text.push_str(branch);
        }
        text
    }
}

/// Accepts `f` or `F` for full, `c` or `G` for compact and `o` for original
impl FromStr for BicFormat {
    type Err = EnbanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "f" | "F" => Ok(Self::Full),
            "c" | "G" => Ok(Self::Compact),
            "o" => Ok(Self::Original),
            _ => Err(EnbanError::MalformedInput(format!(
                "unknown BIC format specifier '{s}' (expected: f, F, c, G or o)"
            ))),
        }
    }
}

/// A validated BIC
///
/// The branch code is optional; without one the BIC denotes the primary
/// office and [`Bic::branch_code`] reports `XXX`. Equality, hashing and
/// ordering treat `DRESDEFF` and `DRESDEFFXXX` as the same BIC.
///
/// `Display` writes the compact form, `{:#}` the full form.
#[derive(Debug, Clone)]
pub struct Bic {
    institution_code: String,
    country_code: String,
    location_code: String,
    branch_code: Option<String>,
}

impl Bic {
    /// Validate the parts against the built-in country list
    pub fn new(
        institution_code: &str,
        country_code: &str,
        location_code: &str,
        branch_code: Option<&str>,
    ) -> Result<Self> {
        Self::with_known_codes(
            KnownCountryCodes::builtin().as_ref(),
            institution_code,
            country_code,
            location_code,
            branch_code,
        )
    }

    /// Validate the parts against a caller supplied country list
    pub fn with_known_codes<K>(
        known: &K,
        institution_code: &str,
        country_code: &str,
        location_code: &str,
        branch_code: Option<&str>,
    ) -> Result<Self>
    where
        K: CountryCodeSet + ?Sized,
    {
        validate_institution_code(institution_code)?;
        validate_country_code(known, country_code)?;
        validate_location_code(location_code)?;
        if let Some(branch_code) = branch_code {
            validate_branch_code(branch_code)?;
        }

        Ok(Self {
            institution_code: institution_code.to_string(),
            country_code: country_code.to_string(),
            location_code: location_code.to_string(),
            branch_code: branch_code.map(str::to_string),
        })
    }

    /// Parse with the given styles against the built-in country list
    pub fn parse(text: &str, styles: BicStyles) -> Result<Self> {
        BicPattern::compact().with_styles(styles).parse(text)
    }

    pub fn institution_code(&self) -> &str {
        &self.institution_code
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn location_code(&self) -> &str {
        &self.location_code
    }

    /// Branch code, `XXX` when none was given
    pub fn branch_code(&self) -> &str {
        self.branch_code.as_deref().unwrap_or(PRIMARY_OFFICE_BRANCH_CODE)
    }

    /// Branch code as constructed, `None` for eight character BICs
    pub fn explicit_branch_code(&self) -> Option<&str> {
        self.branch_code.as_deref()
    }

    pub fn has_explicit_branch_code(&self) -> bool {
        self.branch_code.is_some()
    }

    pub fn is_primary_office(&self) -> bool {
        self.branch_code() == PRIMARY_OFFICE_BRANCH_CODE
    }

    /// Render in the given layout
    pub fn format(&self, format: BicFormat) -> String {
        format.apply(self)
    }

    /// Split into institution, country, location and optional branch code
    pub fn into_parts(self) -> (String, String, String, Option<String>) {
        (
            self.institution_code,
            self.country_code,
            self.location_code,
            self.branch_code,
        )
    }

    fn key(&self) -> (&str, &str, &str, &str) {
        (
            &self.institution_code,
            &self.country_code,
            &self.location_code,
            self.branch_code(),
        )
    }
}

impl PartialEq for Bic {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Bic {}

impl Hash for Bic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Bic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if f.alternate() {
            BicFormat::Full
        } else {
            BicFormat::Compact
        };
        f.write_str(&format.apply(self))
    }
}

/// Parses leniently: any case, surrounding white space, 8 or 11 characters
impl FromStr for Bic {
    type Err = EnbanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, BicStyles::LENIENT)
    }
}

/// Serializes the original form so that round trips keep the branch code
#[cfg(feature = "serde")]
impl serde::Serialize for Bic {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format(BicFormat::Original))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Bic {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

fn is_upper_alphanumeric(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

/// Check length and alphabet of a code, returning the reason it fails
fn check_code(code: &str, length: usize, letters_only: bool) -> Option<String> {
    if code.chars().count() != length {
        return Some(format!(
            "'{code}' has wrong length (expected: {length}, actual: {})",
            code.chars().count()
        ));
    }

    let valid = if letters_only {
        code.chars().all(|c| c.is_ascii_uppercase())
    } else {
        code.chars().all(is_upper_alphanumeric)
    };
    if !valid {
        let alphabet = if letters_only { "A-Z" } else { "A-Z or 0-9" };
        return Some(format!("'{code}' contains characters outside {alphabet}"));
    }

    None
}

fn validate_institution_code(code: &str) -> Result<()> {
    match check_code(code, INSTITUTION_CODE_LENGTH, false) {
        Some(reason) => Err(EnbanError::InvalidInstitutionCode(reason)),
        None => Ok(()),
    }
}

fn validate_country_code<K>(known: &K, code: &str) -> Result<()>
where
    K: CountryCodeSet + ?Sized,
{
    if let Some(reason) = check_code(code, enban_core::format::constants::COUNTRY_CODE_LENGTH, true) {
        return Err(EnbanError::InvalidCountryCode(reason));
    }
    if !known.is_known(code) {
        return Err(EnbanError::InvalidCountryCode(format!("'{code}' is not a known country")));
    }
    Ok(())
}

fn validate_location_code(code: &str) -> Result<()> {
    if let Some(reason) = check_code(code, LOCATION_CODE_LENGTH, false) {
        return Err(EnbanError::InvalidLocationCode(reason));
    }
    // A trailing 'O' is reserved
    if code.ends_with('O') {
        return Err(EnbanError::InvalidLocationCode(format!(
            "'{code}' must not end with the letter O"
        )));
    }
    Ok(())
}

fn validate_branch_code(code: &str) -> Result<()> {
    if let Some(reason) = check_code(code, BRANCH_CODE_LENGTH, false) {
        return Err(EnbanError::InvalidBranchCode(reason));
    }
    if code.starts_with('X') && code != PRIMARY_OFFICE_BRANCH_CODE {
        return Err(EnbanError::InvalidBranchCode(format!(
            "'{code}' starts with X but is not {PRIMARY_OFFICE_BRANCH_CODE}"
        )));
    }
    Ok(())
}
