//! Currency code type
//!
//! Three-letter currency codes as reported on postbacks. This is a format
//! check only; ISO-4217 membership is not verified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A three-letter currency code, stored uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

/// Errors that can occur when creating a Currency
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    #[error("currency must be exactly 3 letters (got {0} characters)")]
    WrongLength(usize),

    #[error("currency must contain only letters")]
    NotAlphabetic,
}

impl Currency {
    /// Validate and normalize a currency code.
    pub fn new(code: &str) -> Result<Self, CurrencyError> {
        let code = code.trim();
        if code.chars().count() != 3 {
            return Err(CurrencyError::WrongLength(code.chars().count()));
        }
        if !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::NotAlphabetic);
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}
