use std::iter::Peekable;

use tracing::{debug, trace};

use crate::{
    calculator::operator::{Operator, OperatorSet},
    error::{ConfigError, EvalError},
    numeral::{NumeralConverter, RomanConverter},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Opens a group.
pub const OPEN_BRACKET: char = '(';
/// Closes a group.
pub const CLOSE_BRACKET: char = ')';

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// An open bracket waiting for its `)`.
    Open { position: usize },
    /// An operator waiting for its right operand to be complete.
    Operator { operator: Operator, position: usize },
}

/// Evaluates infix expressions over numerals.
///
/// The evaluator owns an immutable operator set and a stateless converter.
/// Every call to [`evaluate`](Self::evaluate) works on its own stacks, so a
/// single evaluator can serve any number of threads.
///
/// ## Usage
///
/// [`ExpressionEvaluator::roman`] builds the usual Roman calculator with `+`,
/// `-` and `*`. Custom operator sets or converters go through
/// [`ExpressionEvaluator::new`].
///
/// # Example
/// ```
/// use roman_calc::calculator::ExpressionEvaluator;
///
/// let calculator = ExpressionEvaluator::roman();
/// assert_eq!(calculator.evaluate("(MMMDCCXXIV - MMCCXXIX) * II").unwrap(), "MMCMXC");
/// assert_eq!(calculator.evaluate("X - V - I").unwrap(), "IV");
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionEvaluator<C = RomanConverter> {
    operators: OperatorSet,
    converter: C,
}

impl ExpressionEvaluator<RomanConverter> {
    /// Creates an evaluator for Roman numerals with the standard operators.
    #[must_use]
    pub fn roman() -> Self {
        Self { operators: OperatorSet::standard(),
               converter: RomanConverter, }
    }
}

impl Default for ExpressionEvaluator<RomanConverter> {
    fn default() -> Self {
        Self::roman()
    }
}

impl<C: NumeralConverter> ExpressionEvaluator<C> {
    /// Creates an evaluator from an operator set and a converter.
    ///
    /// # Errors
    /// Returns [`ConfigError::ReservedSymbol`] if an operator symbol is also a
    /// numeral character of `converter`.
    ///
    /// # Example
    /// ```
    /// use roman_calc::{
    ///     calculator::{ExpressionEvaluator, Operator, OperatorSet},
    ///     error::ConfigError,
    ///     numeral::RomanConverter,
    /// };
    ///
    /// let max = Operator::new('M', 3, |a: i64, b: i64| Some(a.max(b)));
    /// let operators = OperatorSet::new([Operator::ADD, max]).unwrap();
    ///
    /// let err = ExpressionEvaluator::new(operators, RomanConverter).unwrap_err();
    /// assert_eq!(err, ConfigError::ReservedSymbol { symbol: 'M' });
    /// ```
    pub fn new(operators: OperatorSet, converter: C) -> Result<Self, ConfigError> {
        if let Some(operator) = operators.iter()
                                         .find(|operator| converter.is_numeral_char(operator.symbol()))
        {
            return Err(ConfigError::ReservedSymbol { symbol: operator.symbol() });
        }

        Ok(Self { operators,
                  converter })
    }

    /// The operators this evaluator recognizes.
    #[must_use]
    pub const fn operators(&self) -> &OperatorSet {
        &self.operators
    }

    /// Evaluates `expression` and formats the result as a numeral.
    ///
    /// # Errors
    /// Any [`EvalError`]; see [`evaluate_value`](Self::evaluate_value). A
    /// result without a representation yields [`EvalError::OutOfRange`].
    pub fn evaluate(&self, expression: &str) -> EvalResult<String> {
        let value = self.evaluate_value(expression)?;
        let numeral = self.converter.format(value)?;
        debug!(expression, value, %numeral, "evaluated expression");
        Ok(numeral)
    }

    /// Evaluates `expression` and returns the integer result.
    ///
    /// The result is not checked against the numeral range, so intermediate
    /// and final values may be zero or negative.
    ///
    /// # Errors
    /// - [`EvalError::UnknownCharacter`] for a character that is not
    ///   whitespace, a bracket, an operator or a numeral character.
    /// - [`EvalError::InvalidToken`] for a malformed numeral.
    /// - [`EvalError::UnbalancedBrackets`] for an unmatched `(` or `)`.
    /// - [`EvalError::InsufficientOperands`] when an operator lacks operands.
    /// - [`EvalError::MalformedSequence`] when not exactly one value remains.
    /// - [`EvalError::Overflow`] when an operation leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use roman_calc::calculator::ExpressionEvaluator;
    ///
    /// let calculator = ExpressionEvaluator::roman();
    /// assert_eq!(calculator.evaluate_value("V - X").unwrap(), -5);
    /// ```
    pub fn evaluate_value(&self, expression: &str) -> EvalResult<i64> {
        debug!(expression, "evaluating expression");

        let mut pending = Vec::new();
        let mut operands = Vec::new();
        let mut chars = expression.char_indices().peekable();

        while let Some((position, ch)) = chars.next() {
            if ch.is_whitespace() {
                continue;
            }

            if ch == OPEN_BRACKET {
                pending.push(Pending::Open { position });
            } else if ch == CLOSE_BRACKET {
                Self::close_group(position, &mut pending, &mut operands)?;
            } else if let Some(&operator) = self.operators.get(ch) {
                Self::push_operator(operator, position, &mut pending, &mut operands)?;
            } else if self.converter.is_numeral_char(ch) {
                let value = self.read_numeral(expression, position, &mut chars)?;
                operands.push(value);
            } else {
                return Err(EvalError::UnknownCharacter { character: ch,
                                                         position });
            }
        }

        while let Some(entry) = pending.pop() {
            match entry {
                Pending::Open { position } => {
                    return Err(EvalError::UnbalancedBrackets { position });
                },
                Pending::Operator { operator, position } => {
                    Self::apply(operator, position, &mut operands)?;
                },
            }
        }

        match operands.as_slice() {
            &[value] => Ok(value),
            _ => Err(EvalError::MalformedSequence { operands: operands.len() }),
        }
    }

    /// Reads the maximal run of numeral characters starting at `start` and
    /// converts it.
    fn read_numeral<I>(&self,
                       expression: &str,
                       start: usize,
                       chars: &mut Peekable<I>)
                       -> EvalResult<i64>
        where I: Iterator<Item = (usize, char)>
    {
        while chars.next_if(|&(_, ch)| self.converter.is_numeral_char(ch))
                   .is_some()
        {}
        let end = chars.peek().map_or(expression.len(), |&(position, _)| position);
        let token = &expression[start..end];

        self.converter
            .try_parse(token)
            .ok_or_else(|| EvalError::InvalidToken { token:    token.to_string(),
                                                     position: start, })
    }

    /// Applies pending operators down to the matching open bracket, which is
    /// discarded.
    fn close_group(position: usize,
                   pending: &mut Vec<Pending>,
                   operands: &mut Vec<i64>)
                   -> EvalResult<()> {
        loop {
            match pending.pop() {
                Some(Pending::Open { .. }) => return Ok(()),
                Some(Pending::Operator { operator,
                                         position: operator_position, }) => {
                    Self::apply(operator, operator_position, operands)?;
                },
                None => return Err(EvalError::UnbalancedBrackets { position }),
            }
        }
    }

    /// Applies every pending operator that binds at least as tightly as
    /// `incoming`, then pushes `incoming`.
    fn push_operator(incoming: Operator,
                     position: usize,
                     pending: &mut Vec<Pending>,
                     operands: &mut Vec<i64>)
                     -> EvalResult<()> {
        while let Some(&Pending::Operator { operator,
                                           position: operator_position, }) = pending.last()
              && operator.precedence() >= incoming.precedence()
        {
            pending.pop();
            Self::apply(operator, operator_position, operands)?;
        }

        pending.push(Pending::Operator { operator: incoming,
                                         position });
        Ok(())
    }

    /// Replaces the two topmost operands with `left OP right`.
    fn apply(operator: Operator, position: usize, operands: &mut Vec<i64>) -> EvalResult<()> {
        let &[.., left, right] = operands.as_slice() else {
            return Err(EvalError::InsufficientOperands { operator: operator.symbol(),
                                                         position });
        };
        operands.truncate(operands.len() - 2);

        let result = operator.apply(left, right)
                             .ok_or(EvalError::Overflow { operator: operator.symbol(),
                                                          left,
                                                          right,
                                                          position })?;
        trace!(operator = %operator.symbol(), left, right, result, "applied operator");
        operands.push(result);
        Ok(())
    }
}
