use std::collections::HashMap;

use crate::{
    calculator::evaluator::{CLOSE_BRACKET, OPEN_BRACKET},
    error::ConfigError,
};

/// Checked binary function applied as `left OP right`.
///
/// Returns `None` when the result does not fit in an `i64`.
pub type BinaryFn = fn(i64, i64) -> Option<i64>;

/// A binary, left-associative infix operator.
///
/// # Example
/// ```
/// use roman_calc::calculator::Operator;
///
/// assert_eq!(Operator::SUB.apply(10, 4), Some(6));
/// assert!(Operator::MUL.precedence() > Operator::ADD.precedence());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    symbol:     char,
    precedence: u8,
    function:   BinaryFn,
}

impl Operator {
    /// `+`
    pub const ADD: Self = Self::new('+', 1, i64::checked_add);
    /// `-`
    pub const SUB: Self = Self::new('-', 1, i64::checked_sub);
    /// `*`
    pub const MUL: Self = Self::new('*', 2, i64::checked_mul);

    /// Creates an operator. Higher `precedence` binds tighter.
    #[must_use]
    pub const fn new(symbol: char, precedence: u8, function: BinaryFn) -> Self {
        Self { symbol,
               precedence,
               function }
    }

    /// The character that denotes the operator in an expression.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// The binding strength of the operator.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        self.precedence
    }

    /// Computes `left OP right`, or `None` on overflow.
    #[must_use]
    pub fn apply(&self, left: i64, right: i64) -> Option<i64> {
        (self.function)(left, right)
    }
}

/// An immutable mapping from symbols to operators.
///
/// # Example
/// ```
/// use roman_calc::{
///     calculator::{Operator, OperatorSet},
///     error::ConfigError,
/// };
///
/// let set = OperatorSet::new([Operator::ADD, Operator::MUL]).unwrap();
/// assert!(set.contains('*'));
/// assert!(!set.contains('-'));
///
/// let err = OperatorSet::new([Operator::ADD, Operator::ADD]).unwrap_err();
/// assert_eq!(err, ConfigError::DuplicateOperator { symbol: '+' });
/// ```
#[derive(Debug, Clone)]
pub struct OperatorSet {
    operators: HashMap<char, Operator>,
}

impl OperatorSet {
    /// Builds a set from the given operators.
    ///
    /// # Errors
    /// - [`ConfigError::EmptyOperatorSet`] if no operator is given.
    /// - [`ConfigError::DuplicateOperator`] if two operators share a symbol.
    /// - [`ConfigError::ReservedSymbol`] if a symbol is whitespace or a
    ///   bracket.
    pub fn new<I>(operators: I) -> Result<Self, ConfigError>
        where I: IntoIterator<Item = Operator>
    {
        let mut map = HashMap::new();
        for operator in operators {
            let symbol = operator.symbol();
            if symbol.is_whitespace() || symbol == OPEN_BRACKET || symbol == CLOSE_BRACKET {
                return Err(ConfigError::ReservedSymbol { symbol });
            }
            if map.insert(symbol, operator).is_some() {
                return Err(ConfigError::DuplicateOperator { symbol });
            }
        }

        if map.is_empty() {
            return Err(ConfigError::EmptyOperatorSet);
        }
        Ok(Self { operators: map })
    }

    /// The default set: `+` and `-` at precedence 1, `*` at precedence 2.
    #[must_use]
    pub fn standard() -> Self {
        let operators = [Operator::ADD, Operator::SUB, Operator::MUL];
        Self { operators: operators.into_iter()
                                   .map(|operator| (operator.symbol(), operator))
                                   .collect(), }
    }

    /// Looks up the operator denoted by `symbol`.
    #[must_use]
    pub fn get(&self, symbol: char) -> Option<&Operator> {
        self.operators.get(&symbol)
    }

    /// Returns `true` if `symbol` denotes an operator of this set.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.operators.contains_key(&symbol)
    }

    /// Iterates over the operators in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.operators.values()
    }

    /// Number of operators in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Returns `true` if the set holds no operators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self::standard()
    }
}
