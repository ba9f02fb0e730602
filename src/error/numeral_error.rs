use thiserror::Error;

use crate::numeral::MAX_VALUE;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur while converting numerals.
pub enum NumeralError {
    /// The integer has no Roman representation.
    #[error("{value} has no Roman representation; only 1 to {max} can be written.", max = MAX_VALUE)]
    OutOfRange {
        /// The integer that was rejected.
        value: i64,
    },
    /// The text is not a canonical Roman numeral.
    #[error("'{numeral}' is not a valid Roman numeral.")]
    Invalid {
        /// The rejected text.
        numeral: String,
    },
}
