//! # roman-calc
//!
//! roman-calc evaluates arithmetic expressions written with Roman numerals.
//! Expressions may use `+`, `-`, `*` and brackets with the usual precedence,
//! and the result is written back as a Roman numeral.
//!
//! ```
//! assert_eq!(roman_calc::evaluate("(I + II) * III").unwrap().as_str(), "IX");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{calculator::ExpressionEvaluator, error::EvalError, numeral::RomanNumeral};

/// Evaluates expressions.
///
/// This module declares the operator model and the scanning evaluator that
/// turns an expression string into a single integer and then into a numeral.
///
/// # Responsibilities
/// - Validates operator sets when they are built.
/// - Resolves precedence, associativity and brackets in one pass.
/// - Aborts on the first error without partial results.
pub mod calculator;
/// Provides unified error types for configuration, evaluation and conversion.
///
/// Every failure carries enough detail (symbols, tokens, byte offsets) to be
/// reported to a user without further context.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Implements `Display` and `std::error::Error` for each of them.
pub mod error;
/// Converts between Roman numerals and integers.
///
/// This module validates numerals against the canonical positional grammar
/// and formats integers between 1 and 3999.
///
/// # Responsibilities
/// - Recognizes numeral characters for the scanner.
/// - Parses canonical numerals and rejects everything else.
/// - Formats integers greedily into canonical numerals.
pub mod numeral;

/// Expression evaluated by the command line tool when none is given.
pub const REFERENCE_EXPRESSION: &str = "(MMMDCCXXIV - MMCCXXIX) * II";

/// Evaluates `expression` with the standard Roman calculator.
///
/// # Errors
/// Returns an [`EvalError`] if the expression is malformed or its result has
/// no Roman representation.
///
/// # Examples
/// ```
/// use roman_calc::{REFERENCE_EXPRESSION, error::EvalError, evaluate};
///
/// let result = evaluate(REFERENCE_EXPRESSION).unwrap();
/// assert_eq!(result.as_str(), "MMCMXC");
/// assert_eq!(result.value(), 2990);
///
/// // Unclosed bracket.
/// let err = evaluate("(I + II").unwrap_err();
/// assert!(matches!(err, EvalError::UnbalancedBrackets { .. }));
/// ```
pub fn evaluate(expression: &str) -> Result<RomanNumeral, EvalError> {
    let value = ExpressionEvaluator::roman().evaluate_value(expression)?;
    Ok(RomanNumeral::try_from(value)?)
}
