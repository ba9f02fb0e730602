use thiserror::Error;

use crate::error::NumeralError;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Positions are byte offsets into the evaluated expression.
pub enum EvalError {
    /// A `)` had no matching `(`, or a `(` was never closed.
    #[error("Error at {position}: Expression has an unbalanced bracket.")]
    UnbalancedBrackets {
        /// Offset of the offending bracket.
        position: usize,
    },
    /// A run of numeral characters is not a canonical Roman numeral.
    #[error("Error at {position}: '{token}' is not a valid Roman numeral.")]
    InvalidToken {
        /// The rejected run of numeral characters.
        token:    String,
        /// Offset where the run starts.
        position: usize,
    },
    /// A character is neither whitespace, a bracket, an operator nor a
    /// numeral character.
    #[error("Error at {position}: Unknown character '{character}'.")]
    UnknownCharacter {
        /// The unexpected character.
        character: char,
        /// Offset of the character.
        position:  usize,
    },
    /// An operator was applied with fewer than two operands available.
    #[error("Error at {position}: Operator '{operator}' is missing an operand.")]
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: char,
        /// Offset of the operator.
        position: usize,
    },
    /// The evaluation did not end with exactly one value.
    #[error("Expression left {operands} values instead of one. Check for missing operators or operands.")]
    MalformedSequence {
        /// Number of operands left after the final drain.
        operands: usize,
    },
    /// An intermediate result does not fit in 64 bits.
    #[error("Error at {position}: {left} {operator} {right} overflows.")]
    Overflow {
        /// The operator that overflowed.
        operator: char,
        /// Left operand.
        left:     i64,
        /// Right operand.
        right:    i64,
        /// Offset of the operator.
        position: usize,
    },
    /// The final result cannot be written as a Roman numeral.
    #[error(transparent)]
    OutOfRange(#[from] NumeralError),
}
