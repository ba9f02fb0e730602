//! Property-based tests for numeral conversion and evaluation.
//!
//! Random values and expression trees are checked against plain integer
//! arithmetic, complementing the hand-written cases in the other test files.

use proptest::prelude::*;
use roman_calc::{
    calculator::ExpressionEvaluator,
    numeral::{MAX_VALUE, MIN_VALUE, NumeralConverter, RomanConverter},
};

/// A small expression tree rendered with full brackets.
#[derive(Debug, Clone)]
enum Tree {
    Leaf(i64),
    Node(Box<Tree>, char, Box<Tree>),
}

impl Tree {
    fn render(&self) -> String {
        match self {
            Self::Leaf(value) => RomanConverter.format(*value).expect("leaf in range"),
            Self::Node(left, op, right) => format!("({} {op} {})", left.render(), right.render()),
        }
    }

    fn value(&self) -> i64 {
        match self {
            Self::Leaf(value) => *value,
            Self::Node(left, '+', right) => left.value() + right.value(),
            Self::Node(left, '-', right) => left.value() - right.value(),
            Self::Node(left, _, right) => left.value() * right.value(),
        }
    }
}

fn tree_strategy() -> impl Strategy<Value = Tree> {
    let leaf = (1..=50_i64).prop_map(Tree::Leaf);
    leaf.prop_recursive(3, 8, 2, |inner| {
            (inner.clone(), prop::sample::select(vec!['+', '-', '*']), inner)
                .prop_map(|(left, op, right)| Tree::Node(Box::new(left), op, Box::new(right)))
        })
}

/// Every Roman symbol, plus characters that must never be accepted.
fn numeral_like_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[IVXLCDMiv]{0,10}").expect("valid regex")
}

proptest! {
    #[test]
    fn format_then_parse_round_trips(value in MIN_VALUE..=MAX_VALUE) {
        let numeral = RomanConverter.format(value).unwrap();
        prop_assert_eq!(RomanConverter.try_parse(&numeral), Some(value));
    }

    #[test]
    fn formatted_numerals_are_canonical(value in MIN_VALUE..=MAX_VALUE) {
        let numeral = RomanConverter.format(value).unwrap();
        for symbol in ['I', 'X', 'C', 'M'] {
            prop_assert!(!numeral.contains(&symbol.to_string().repeat(4)), "{} repeats {}", numeral, symbol);
        }
        for symbol in ['V', 'L', 'D'] {
            prop_assert!(numeral.matches(symbol).count() <= 1, "{} repeats {}", numeral, symbol);
        }
    }

    #[test]
    fn accepted_numerals_are_canonical(text in numeral_like_strategy()) {
        if let Some(value) = RomanConverter.try_parse(&text) {
            prop_assert_eq!(RomanConverter.format(value).unwrap(), text);
        }
    }

    #[test]
    fn out_of_range_values_are_rejected(value in prop_oneof![i64::MIN..MIN_VALUE, (MAX_VALUE + 1)..=i64::MAX]) {
        prop_assert!(RomanConverter.format(value).is_err());
    }

    #[test]
    fn evaluation_agrees_with_integer_arithmetic(tree in tree_strategy()) {
        let calculator = ExpressionEvaluator::roman();
        prop_assert_eq!(calculator.evaluate_value(&tree.render()).unwrap(), tree.value());
    }

    #[test]
    fn whitespace_does_not_change_the_result(tree in tree_strategy()) {
        let calculator = ExpressionEvaluator::roman();
        let spaced = tree.render();
        let compact: String = spaced.chars().filter(|ch| !ch.is_whitespace()).collect();
        prop_assert_eq!(calculator.evaluate_value(&compact).unwrap(),
                        calculator.evaluate_value(&spaced).unwrap());
    }
}
