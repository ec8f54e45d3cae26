//! Lookup interfaces for country data
//!
//! Both lookups are read-only. Implementations are built once and then
//! shared between threads.

use crate::format::Segment;

/// Source of BBAN structure patterns, keyed by ISO 3166-1 alpha-2 code
pub trait AccountPatterns {
    /// Get the ordered segments for a country, if one is registered
    fn segments(&self, country_code: &str) -> Option<&[Segment]>;

    /// Whether any pattern is registered for a country
    fn contains_country(&self, country_code: &str) -> bool {
        self.segments(country_code).is_some()
    }
}

/// Set of country codes accepted inside a BIC
pub trait CountryCodeSet {
    /// Whether `code` is a known country code
    fn is_known(&self, code: &str) -> bool;
}

impl<F> CountryCodeSet for F
where
    F: Fn(&str) -> bool,
{
    fn is_known(&self, code: &str) -> bool {
        self(code)
    }
}

impl CountryCodeSet for [&str] {
    fn is_known(&self, code: &str) -> bool {
        self.iter().any(|known| *known == code)
    }
}
