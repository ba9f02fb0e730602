use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur while building an operator set.
pub enum ConfigError {
    /// No operators were supplied.
    #[error("Operator set must contain at least one operator.")]
    EmptyOperatorSet,
    /// Two operators share the same symbol.
    #[error("Operator '{symbol}' is defined more than once.")]
    DuplicateOperator {
        /// The repeated symbol.
        symbol: char,
    },
    /// The symbol is whitespace, a bracket or a numeral character and could
    /// never be scanned as an operator.
    #[error("Symbol '{symbol}' is reserved and cannot be used as an operator.")]
    ReservedSymbol {
        /// The rejected symbol.
        symbol: char,
    },
}
