use pretty_assertions::assert_eq;
use roman_calc::{
    calculator::{ExpressionEvaluator, Operator, OperatorSet},
    error::{ConfigError, EvalError},
    numeral::RomanConverter,
};

const MAX: Operator = Operator::new('^', 3, |left: i64, right: i64| Some(left.max(right)));
const DIV: Operator = Operator::new('/', 2, i64::checked_div);

fn evaluator(operators: &[Operator]) -> ExpressionEvaluator {
    let set = OperatorSet::new(operators.iter().copied()).unwrap();
    ExpressionEvaluator::new(set, RomanConverter).unwrap()
}

#[test]
fn standard_set() {
    let set = OperatorSet::standard();
    assert_eq!(set.len(), 3);
    assert!(!set.is_empty());
    for symbol in ['+', '-', '*'] {
        assert!(set.contains(symbol), "{symbol} should be a standard operator");
    }
    assert!(!set.contains('/'));
    assert_eq!(set.get('+').map(Operator::precedence), Some(1));
    assert_eq!(set.get('-').map(Operator::precedence), Some(1));
    assert_eq!(set.get('*').map(Operator::precedence), Some(2));
}

#[test]
fn builtin_operators_apply_left_to_right() {
    assert_eq!(Operator::ADD.apply(3, 4), Some(7));
    assert_eq!(Operator::SUB.apply(3, 4), Some(-1));
    assert_eq!(Operator::MUL.apply(3, 4), Some(12));
    assert_eq!(Operator::MUL.apply(i64::MAX, 2), None);
}

#[test]
fn empty_set_is_rejected() {
    assert_eq!(OperatorSet::new(Vec::<Operator>::new()).unwrap_err(), ConfigError::EmptyOperatorSet);
}

#[test]
fn duplicate_symbols_are_rejected() {
    let twice = Operator::new('+', 5, i64::checked_mul);
    assert_eq!(OperatorSet::new([Operator::ADD, Operator::SUB, twice]).unwrap_err(),
               ConfigError::DuplicateOperator { symbol: '+' });
}

#[test]
fn reserved_symbols_are_rejected() {
    for symbol in ['(', ')', ' ', '\t'] {
        let operator = Operator::new(symbol, 1, i64::checked_add);
        assert_eq!(OperatorSet::new([operator]).unwrap_err(),
                   ConfigError::ReservedSymbol { symbol });
    }
}

#[test]
fn numeral_symbols_are_rejected_by_the_evaluator() {
    let set = OperatorSet::new([Operator::new('X', 2, i64::checked_mul)]).unwrap();
    assert_eq!(ExpressionEvaluator::new(set, RomanConverter).unwrap_err(),
               ConfigError::ReservedSymbol { symbol: 'X' });
}

#[test]
fn custom_operators_take_part_in_precedence() {
    let calculator = evaluator(&[Operator::ADD, Operator::MUL, MAX]);
    assert_eq!(calculator.evaluate("II * V ^ III").unwrap(), "X");
    assert_eq!(calculator.evaluate("I + II ^ X").unwrap(), "XI");
    assert_eq!(calculator.evaluate("(I + II) ^ II").unwrap(), "III");
}

#[test]
fn custom_operator_failure_is_overflow() {
    let calculator = evaluator(&[Operator::ADD, DIV]);
    assert_eq!(calculator.evaluate("C / X / V").unwrap(), "II");
    assert_eq!(calculator.evaluate("X / (I + I)").unwrap(), "V");
    assert_eq!(calculator.evaluate_value("I / (I / II)").unwrap_err(),
               EvalError::Overflow { operator: '/',
                                     left:     1,
                                     right:    0,
                                     position: 2, });
}

#[test]
fn operators_outside_the_set_are_unknown() {
    let calculator = evaluator(&[Operator::ADD]);
    assert_eq!(calculator.operators().len(), 1);
    assert_eq!(calculator.evaluate("II - I").unwrap_err(),
               EvalError::UnknownCharacter { character: '-',
                                             position:  3, });
}

#[test]
fn config_messages_are_readable() {
    assert_eq!(ConfigError::DuplicateOperator { symbol: '*' }.to_string(),
               "Operator '*' is defined more than once.");
    assert_eq!(ConfigError::EmptyOperatorSet.to_string(),
               "Operator set must contain at least one operator.");
}
