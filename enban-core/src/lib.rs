#![cfg_attr(not(test), no_std)]

//! Enban Core - IBAN/BIC structure and check digit definitions
//!
//! This crate provides the pure engines behind IBAN and BIC handling: the
//! BBAN structure pattern language, the segment matcher, ISO/IEC 7064
//! MOD 97-10 check digits, and the parse style flags. No I/O, no global
//! state; country data is supplied through the traits in [`traits`].

extern crate alloc;

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::CheckDigit;
