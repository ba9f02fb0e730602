use std::{fmt, str::FromStr};

use crate::{
    error::NumeralError,
    numeral::converter::{NumeralConverter, RomanConverter},
};

/// A canonical Roman numeral together with the integer it denotes.
///
/// Values can only be built through validation, so the text is always in
/// canonical form and the value always lies between
/// [`MIN_VALUE`](crate::numeral::MIN_VALUE) and
/// [`MAX_VALUE`](crate::numeral::MAX_VALUE).
///
/// # Example
/// ```
/// use roman_calc::numeral::RomanNumeral;
///
/// let year: RomanNumeral = "MMXXIV".parse().unwrap();
/// assert_eq!(year.value(), 2024);
///
/// let next = RomanNumeral::try_from(year.value() + 1).unwrap();
/// assert_eq!(next.to_string(), "MMXXV");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomanNumeral {
    text:  String,
    value: i64,
}

impl RomanNumeral {
    /// Returns the canonical text of the numeral.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the integer the numeral denotes.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Consumes the numeral and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl TryFrom<i64> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let text = RomanConverter.format(value)?;
        Ok(Self { text, value })
    }
}

impl FromStr for RomanNumeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RomanConverter.try_parse(s)
                      .map(|value| Self { text: s.to_string(),
                                          value })
                      .ok_or_else(|| NumeralError::Invalid { numeral: s.to_string() })
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
