/// The scanning two-stack evaluator.
///
/// Reads an expression once, from left to right, without a separate
/// tokenization pass. Operators and open brackets wait on one stack, integer
/// operands on another, and operators are applied as soon as precedence
/// allows.
///
/// # Responsibilities
/// - Skips whitespace, matches brackets and resolves precedence.
/// - Delegates numeral recognition and conversion to a
///   [`NumeralConverter`](crate::numeral::NumeralConverter).
/// - Reports every failure as an [`EvalError`](crate::error::EvalError)
///   without partial results.
pub mod evaluator;
/// Binary operators and the operator set.
///
/// An [`Operator`] is a plain value: a symbol, a precedence and a checked
/// integer function. An [`OperatorSet`] is validated once and never changes
/// afterwards.
pub mod operator;

pub use evaluator::{EvalResult, ExpressionEvaluator};
pub use operator::{Operator, OperatorSet};
