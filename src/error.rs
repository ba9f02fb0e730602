/// Configuration errors.
///
/// Raised while assembling an [`OperatorSet`](crate::calculator::OperatorSet),
/// before any expression is evaluated. A set that fails here could never be
/// used to evaluate anything meaningful.
pub mod config_error;
/// Evaluation errors.
///
/// Contains every failure that can abort the evaluation of a single
/// expression: bracket mismatches, unknown characters, invalid numeral tokens,
/// inconsistent operand/operator sequences and unrepresentable results.
pub mod eval_error;
/// Numeral conversion errors.
///
/// Raised when an integer has no Roman representation or a string is not a
/// canonical Roman numeral.
pub mod numeral_error;

pub use config_error::ConfigError;
pub use eval_error::EvalError;
pub use numeral_error::NumeralError;
