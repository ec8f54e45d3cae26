//! Layout constants for IBAN and BIC text forms

/// Length of an ISO 3166-1 alpha-2 country code
pub const COUNTRY_CODE_LENGTH: usize = 2;

/// Number of check digit characters following the country code of an IBAN
pub const CHECK_DIGIT_LENGTH: usize = 2;

/// Characters preceding the account number in an electronic IBAN
pub const IBAN_PREFIX_LENGTH: usize = COUNTRY_CODE_LENGTH + CHECK_DIGIT_LENGTH;

/// Shortest text accepted as an IBAN (prefix plus at least one account character)
pub const IBAN_MIN_LENGTH: usize = IBAN_PREFIX_LENGTH + 1;

/// Characters per group in the print form of an IBAN
pub const PRINT_GROUP_SIZE: usize = 4;

/// BIC field layout
pub mod bic {
    /// Length of the institution (bank) code
    pub const INSTITUTION_CODE_LENGTH: usize = 4;

    /// Length of the location code
    pub const LOCATION_CODE_LENGTH: usize = 2;

    /// Length of the branch code
    pub const BRANCH_CODE_LENGTH: usize = 3;

    /// Length of a BIC without branch code
    pub const COMPACT_LENGTH: usize = 8;

    /// Length of a BIC with branch code
    pub const FULL_LENGTH: usize = 11;

    /// Branch code of primary offices, implied when the branch code is absent
    pub const PRIMARY_OFFICE_BRANCH_CODE: &str = "XXX";
}
