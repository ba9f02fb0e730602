/// The converter capability and its Roman implementation.
///
/// Defines the [`NumeralConverter`] trait consumed by the evaluator, together
/// with [`RomanConverter`], which validates numerals structurally and formats
/// integers greedily.
pub mod converter;
/// A validated Roman numeral value.
///
/// [`RomanNumeral`] pairs the canonical text with the integer it denotes, so
/// that a value which exists is always well formed and in range.
pub mod roman;

pub use converter::{NumeralConverter, RomanConverter};
pub use roman::RomanNumeral;

/// Smallest integer with a Roman representation.
pub const MIN_VALUE: i64 = 1;
/// Largest integer with a classical Roman representation (`MMMCMXCIX`).
pub const MAX_VALUE: i64 = 3999;
