//! International Bank Account Numbers

use crate::bban::Bban;
use crate::iban_pattern::IbanPattern;
use enban_core::format::constants::PRINT_GROUP_SIZE;
use enban_core::validation::check_digit;
use enban_core::{CheckDigit, EnbanError, IbanStyles, Pattern, Result};
use std::fmt;
use std::str::FromStr;

/// Text layout of an IBAN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IbanFormat {
    /// `DE89370400440532013000`
    #[default]
    Electronic,
    /// `DE89 3704 0044 0532 0130 00`
    Print,
}

impl IbanFormat {
    /// Render an IBAN in this layout
    pub fn apply(&self, iban: &Iban) -> String {
        let electronic = format!(
            "{}{}{}",
            iban.country_code(),
            iban.check_digit(),
            iban.account_number()
        );

        match self {
            Self::Electronic => electronic,
            Self::Print => group_for_print(&electronic),
        }
    }
}

/// Accepts `e`, `G` or an empty specifier for electronic and `p` for print
impl FromStr for IbanFormat {
    type Err = EnbanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "e" | "G" => Ok(Self::Electronic),
            "p" => Ok(Self::Print),
            _ => Err(EnbanError::MalformedInput(format!(
                "unknown IBAN format specifier '{s}' (expected: e, G or p)"
            ))),
        }
    }
}

/// Split into groups of four characters separated by single spaces
fn group_for_print(electronic: &str) -> String {
    let mut grouped = String::with_capacity(electronic.len() + electronic.len() / PRINT_GROUP_SIZE);
    for (i, c) in electronic.chars().enumerate() {
        if i > 0 && i % PRINT_GROUP_SIZE == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// A BBAN with its two-digit check digit
///
/// Values built through [`Iban::new`] or [`Bban::to_iban`] always carry a
/// valid check digit. Parsing with
/// [`IbanStyles::ALLOW_INVALID_CHECK_DIGIT`] or [`Bban::to_iban_with`] can
/// produce one that does not validate; see [`Iban::is_check_digit_valid`].
///
/// `Display` writes the electronic form, `{:#}` the print form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iban {
    bban: Bban,
    check_digit: CheckDigit,
}

impl Iban {
    /// Build and validate an IBAN against the built-in registry
    pub fn new(country_code: &str, account_number: &str, check_digit: u8) -> Result<Self> {
        let check_digit = CheckDigit::new(check_digit)?;
        let bban = Bban::new(country_code, account_number)?;

        if !check_digit::is_valid(bban.country_code(), bban.account_number(), check_digit)? {
            return Err(EnbanError::InvalidCheckDigit {
                country_code: bban.country_code().to_string(),
                check_digit: check_digit.value(),
            });
        }

        Ok(Self::from_bban(bban, check_digit))
    }

    pub(crate) fn from_bban(bban: Bban, check_digit: CheckDigit) -> Self {
        Self { bban, check_digit }
    }

    /// Parse with the given styles against the built-in registry
    pub fn parse(text: &str, styles: IbanStyles) -> Result<Self> {
        IbanPattern::electronic().with_styles(styles).parse(text)
    }

    pub fn bban(&self) -> &Bban {
        &self.bban
    }

    pub fn country_code(&self) -> &str {
        self.bban.country_code()
    }

    pub fn account_number(&self) -> &str {
        self.bban.account_number()
    }

    pub fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }

    /// Recompute MOD 97-10 over the stored parts
    pub fn is_check_digit_valid(&self) -> bool {
        check_digit::is_valid(self.country_code(), self.account_number(), self.check_digit)
            .unwrap_or(false)
    }

    /// Render in the given layout
    pub fn format(&self, format: IbanFormat) -> String {
        format.apply(self)
    }

    /// Drop the check digit
    pub fn into_bban(self) -> Bban {
        self.bban
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if f.alternate() {
            IbanFormat::Print
        } else {
            IbanFormat::Electronic
        };
        f.write_str(&format.apply(self))
    }
}

/// Parses the print form; electronic text is accepted too
impl FromStr for Iban {
    type Err = EnbanError;

    fn from_str(s: &str) -> Result<Self> {
        IbanPattern::print().parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Iban {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Iban {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let iban = Iban::new("DE", "370400440532013000", 89).unwrap();
        assert_eq!(iban.country_code(), "DE");
        assert_eq!(iban.account_number(), "370400440532013000");
        assert_eq!(iban.check_digit().value(), 89);
        assert!(iban.is_check_digit_valid());

        assert_eq!(
            Iban::new("DE", "370400440532013000", 88),
            Err(EnbanError::InvalidCheckDigit {
                country_code: "DE".to_string(),
                check_digit: 88,
            })
        );
        assert_eq!(
            Iban::new("DE", "370400440532013000", 100),
            Err(EnbanError::CheckDigitOutOfRange(100))
        );
    }

    #[test]
    fn test_display() {
        let iban = Iban::new("LU", "0019400644750000", 28).unwrap();
        assert_eq!(iban.to_string(), "LU280019400644750000");
        assert_eq!(format!("{iban:#}"), "LU28 0019 4006 4475 0000");
        assert_eq!(iban.format(IbanFormat::Print), "LU28 0019 4006 4475 0000");

        // Leading zero of the check digit is kept
        let iban = Iban::new("XK", "1212012345678906", 5).unwrap();
        assert_eq!(iban.to_string(), "XK051212012345678906");
        assert_eq!(format!("{iban:#}"), "XK05 1212 0123 4567 8906");
    }

    #[test]
    fn test_group_for_print() {
        assert_eq!(group_for_print("DE89370400440532013000"), "DE89 3704 0044 0532 0130 00");
        assert_eq!(group_for_print("NO9386011117947"), "NO93 8601 1117 947");
        assert_eq!(group_for_print("ABCD"), "ABCD");
        assert_eq!(group_for_print(""), "");
    }

    #[test]
    fn test_format_specifier() {
        assert_eq!("".parse::<IbanFormat>(), Ok(IbanFormat::Electronic));
        assert_eq!("e".parse::<IbanFormat>(), Ok(IbanFormat::Electronic));
        assert_eq!("G".parse::<IbanFormat>(), Ok(IbanFormat::Electronic));
        assert_eq!("p".parse::<IbanFormat>(), Ok(IbanFormat::Print));
        assert!("P".parse::<IbanFormat>().is_err());
    }

    #[test]
    fn test_from_str() {
        let iban: Iban = "CZ65 0800 0000 1920 0014 5399".parse().unwrap();
        assert_eq!(iban.to_string(), "CZ6508000000192000145399");
        assert_eq!("CZ6508000000192000145399".parse::<Iban>(), Ok(iban));
        assert!("DE89370400440532013000X".parse::<Iban>().is_err());
    }

    #[test]
    fn test_ordering_follows_bban() {
        let a = Iban::new("AT", "1904300234573201", 61).unwrap();
        let b: Iban = "DE89370400440532013000".parse().unwrap();
        assert!(a < b);
        assert_eq!(b.clone().into_bban().account_number(), "370400440532013000");
    }
}
