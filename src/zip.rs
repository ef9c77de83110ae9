//! Postal code (CEP) normalization and validation

use std::fmt;
use std::str::FromStr;

use crate::error::ZipWeatherError;

/// Number of digits in a normalized CEP
pub const CEP_LENGTH: usize = 8;

/// An eight-digit Brazilian postal code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Normalize raw input into a postal code.
    ///
    /// Every run of ASCII digits is kept and concatenated in order, whatever
    /// separates them, so `"12.345-678"` becomes `"12345678"`. The result must
    /// be exactly [`CEP_LENGTH`] digits long.
    pub fn parse(raw: &str) -> Result<Self, ZipWeatherError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        if digits.len() != CEP_LENGTH {
            return Err(ZipWeatherError::InvalidZip);
        }
        Ok(Self(digits))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PostalCode {
    type Err = ZipWeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
