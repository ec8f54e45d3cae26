//! Abstract interfaces for Enban
//!
//! This module defines the trait seams between the pure engines and their
//! data sources. Traits are pure interfaces - no concrete implementations
//! beyond trivial blanket ones.

pub mod pattern;
pub mod registry;

pub use pattern::Pattern;
pub use registry::{AccountPatterns, CountryCodeSet};
