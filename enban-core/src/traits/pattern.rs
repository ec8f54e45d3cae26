//! Text pattern abstraction shared by the IBAN and BIC engines

use alloc::string::String;

/// A text form that can both format and parse values of type `T`
pub trait Pattern<T> {
    /// Format a value according to this pattern
    fn format(&self, value: &T) -> String;

    /// Parse text according to this pattern
    ///
    /// Either a fully valid value is produced or the reason for the
    /// rejection is returned; there are no partial results.
    fn parse(&self, text: &str) -> crate::Result<T>;
}
