//! Country registries
//!
//! [`CountryAccountPatterns`] maps ISO 3166-1 alpha-2 codes to compiled
//! BBAN structures and [`KnownCountryCodes`] is the country list used to
//! validate BICs. Both are immutable once built; the built-in instances are
//! compiled on first use and shared behind an [`Arc`].

use enban_core::validation::{compile, to_pattern_text, total_length};
use enban_core::{AccountPatterns, CountryCodeSet, EnbanError, Result, Segment};
use hashbrown::{HashMap, HashSet};
use log::{debug, error};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::sync::Arc;

/// Built-in IBAN countries as `(code, name, BBAN pattern)`
pub const BUILTIN_COUNTRIES: &[(&str, &str, &str)] = &[
    ("AD", "Andorra", "4!n4!n12!c"),
    ("AE", "The United Arab Emirates", "3!n16!n"),
    ("AL", "Albania", "8!n16!c"),
    ("AT", "Austria", "5!n11!n"),
    ("AZ", "Azerbaijan", "4!a20!c"),
    ("BA", "Bosnia and Herzegovina", "3!n3!n8!n2!n"),
    ("BE", "Belgium", "3!n7!n2!n"),
    ("BG", "Bulgaria", "4!a4!n2!n8!c"),
    ("BH", "Bahrain", "4!a14!c"),
    ("BR", "Brazil", "8!n5!n10!n1!a1!c"),
    ("BY", "Republic of Belarus", "4!c4!n16!c"),
    ("CH", "Switzerland", "5!n12!c"),
    ("CR", "Costa Rica", "4!n14!n"),
    ("CY", "Cyprus", "3!n5!n16!c"),
    ("CZ", "Czech Republic", "4!n6!n10!n"),
    ("DE", "Germany", "8!n10!n"),
    ("DK", "Denmark", "4!n9!n1!n"),
    ("DO", "Dominican Republic", "4!c20!n"),
    ("EE", "Estonia", "2!n2!n11!n1!n"),
    ("ES", "Spain", "4!n4!n1!n1!n10!n"),
    ("FI", "Finland", "3!n11!n"),
    ("FO", "Faroe Islands", "4!n9!n1!n"),
    ("FR", "France", "5!n5!n11!c2!n"),
    ("GB", "United Kingdom", "4!a6!n8!n"),
    ("GE", "Georgia", "2!a16!n"),
    ("GI", "Gibraltar", "4!a15!c"),
    ("GL", "Greenland", "4!n9!n1!n"),
    ("GR", "Greece", "3!n4!n16!c"),
    ("GT", "Guatemala", "4!c20!c"),
    ("HR", "Croatia", "7!n10!n"),
    ("HU", "Hungary", "3!n4!n1!n15!n1!n"),
    ("IE", "Ireland", "4!a6!n8!n"),
    ("IL", "Israel", "3!n3!n13!n"),
    ("IQ", "Iraq", "4!a3!n12!n"),
    ("IS", "Iceland", "4!n2!n6!n10!n"),
    ("IT", "Italy", "1!a5!n5!n12!c"),
    ("JO", "Jordan", "4!a4!n18!c"),
    ("KW", "Kuwait", "4!a22!c"),
    ("KZ", "Kazakhstan", "3!n13!c"),
    ("LB", "Lebanon", "4!n20!c"),
    ("LC", "Saint Lucia", "4!a24!c"),
    ("LI", "Liechtenstein", "5!n12!c"),
    ("LT", "Lithuania", "5!n11!n"),
    ("LU", "Luxembourg", "3!n13!c"),
    ("LV", "Latvia", "4!a13!c"),
    ("MC", "Monaco", "5!n5!n11!c2!n"),
    ("MD", "Moldova", "2!c18!c"),
    ("ME", "Montenegro", "3!n13!n2!n"),
    ("MK", "Macedonia", "3!n10!c2!n"),
    ("MR", "Mauritania", "5!n5!n11!n2!n"),
    ("MT", "Malta", "4!a5!n18!c"),
    ("MU", "Mauritius", "4!a2!n2!n12!n3!n3!a"),
    ("NL", "The Netherlands", "4!a10!n"),
    ("NO", "Norway", "4!n6!n1!n"),
    ("PK", "Pakistan", "4!a16!c"),
    ("PL", "Poland", "8!n16!n"),
    ("PS", "State of Palestine", "4!a21!c"),
    ("PT", "Portugal", "4!n4!n11!n2!n"),
    ("QA", "Qatar", "4!a21!c"),
    ("RO", "Romania", "4!a16!c"),
    ("RS", "Serbia", "3!n13!n2!n"),
    ("SA", "Saudi Arabia", "2!n18!c"),
    ("SC", "Seychelles", "4!a2!n2!n16!n3!a"),
    ("SE", "Sweden", "3!n16!n1!n"),
    ("SI", "Slovenia", "5!n8!n2!n"),
    ("SK", "Slovakia", "4!n6!n10!n"),
    ("SM", "San Marino", "1!a5!n5!n12!c"),
    ("ST", "Sao Tome and Principe", "4!n4!n11!n2!n"),
    ("SV", "El Salvador", "4!a20!n"),
    ("TL", "Timor-Leste", "3!n14!n2!n"),
    ("TN", "Tunisia", "2!n3!n13!n2!n"),
    ("TR", "Turkey", "5!n1!n16!c"),
    ("UA", "Ukraine", "6!n19!c"),
    ("VG", "Virgin Islands", "4!a16!n"),
    ("XK", "Kosovo", "4!n10!n2!n"),
];

/// ISO 3166-1 alpha-2 codes accepted in BICs, plus Kosovo (`XK`)
pub const KNOWN_COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW", "XK",
];

static BUILTIN_PATTERNS: Lazy<Arc<CountryAccountPatterns>> = Lazy::new(|| {
    let mut patterns = CountryAccountPatterns::new();
    for &(code, name, pattern) in BUILTIN_COUNTRIES {
        let added = patterns.add(code, Some(name), pattern);
        debug_assert!(added.is_ok(), "built-in country {code} is invalid: {added:?}");
        if let Err(err) = added {
            error!("skipping built-in country {code}: {err}");
        }
    }
    debug!("compiled {} built-in country patterns", patterns.len());
    Arc::new(patterns)
});

static BUILTIN_CODES: Lazy<Arc<KnownCountryCodes>> =
    Lazy::new(|| Arc::new(KnownCountryCodes::from_codes(KNOWN_COUNTRY_CODES)));

/// Upper case `code` only when it holds lower case letters
fn canonical(code: &str) -> Cow<'_, str> {
    if code.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(code.to_ascii_uppercase())
    } else {
        Cow::Borrowed(code)
    }
}

/// A country with a compiled BBAN structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    code: String,
    name: Option<String>,
    segments: Vec<Segment>,
}

impl Country {
    /// Compile a country from its code, optional display name and pattern text
    pub fn new(code: &str, name: Option<&str>, pattern_text: &str) -> Result<Self> {
        let code = code.to_ascii_uppercase();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(EnbanError::MalformedInput(format!(
                "'{code}' is not a two letter country code"
            )));
        }

        Ok(Self {
            code,
            name: name.map(str::to_string),
            segments: compile(pattern_text)?,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Pattern text of the BBAN structure, e.g. `8!n10!n`
    pub fn pattern(&self) -> String {
        to_pattern_text(&self.segments)
    }

    /// Number of characters in a BBAN of this country
    pub fn bban_length(&self) -> usize {
        total_length(&self.segments)
    }

    /// Number of characters in an electronic IBAN of this country
    pub fn iban_length(&self) -> usize {
        self.bban_length() + enban_core::format::constants::IBAN_PREFIX_LENGTH
    }
}

/// Registry of BBAN structures keyed by upper case country code
///
/// Lookups are case-insensitive. Registering the same code twice fails with
/// [`EnbanError::DuplicateCountryCode`].
#[derive(Debug, Clone, Default)]
pub struct CountryAccountPatterns {
    countries: HashMap<String, Country>,
}

impl CountryAccountPatterns {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(code, name, pattern)` rows
    pub fn from_table(rows: &[(&str, &str, &str)]) -> Result<Self> {
        let mut patterns = Self::new();
        for &(code, name, pattern) in rows {
            patterns.add(code, Some(name), pattern)?;
        }
        Ok(patterns)
    }

    /// Shared registry of the built-in countries
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN_PATTERNS)
    }

    /// Compile and register a country pattern
    pub fn add(&mut self, code: &str, name: Option<&str>, pattern_text: &str) -> Result<()> {
        let country = Country::new(code, name, pattern_text)?;
        self.insert(country)
    }

    /// Register an already compiled country
    pub fn insert(&mut self, country: Country) -> Result<()> {
        if self.countries.contains_key(country.code()) {
            return Err(EnbanError::DuplicateCountryCode(country.code));
        }
        self.countries.insert(country.code.clone(), country);
        Ok(())
    }

    /// Look up a country (case-insensitive)
    pub fn country(&self, code: &str) -> Option<&Country> {
        self.countries.get(canonical(code).as_ref())
    }

    /// Pattern text registered for a country
    pub fn pattern(&self, code: &str) -> Option<String> {
        self.country(code).map(Country::pattern)
    }

    /// Registered country codes in ascending order
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.countries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Registered countries ordered by code
    pub fn countries(&self) -> Vec<&Country> {
        let mut countries: Vec<&Country> = self.countries.values().collect();
        countries.sort_unstable_by(|a, b| a.code.cmp(&b.code));
        countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl AccountPatterns for CountryAccountPatterns {
    fn segments(&self, country_code: &str) -> Option<&[Segment]> {
        self.country(country_code).map(Country::segments)
    }
}

/// Set of country codes accepted in BICs, matched case-insensitively
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownCountryCodes {
    codes: HashSet<String>,
}

impl KnownCountryCodes {
    /// Build a set from any list of codes
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|code| code.as_ref().to_ascii_uppercase())
                .collect(),
        }
    }

    /// Shared set of the built-in codes
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN_CODES)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl CountryCodeSet for KnownCountryCodes {
    fn is_known(&self, code: &str) -> bool {
        self.codes.contains(canonical(code).as_ref())
    }
}
