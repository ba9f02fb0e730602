use crate::{
    error::NumeralError,
    numeral::{MAX_VALUE, MIN_VALUE},
};

/// Greedy formatting table, largest value first.
const FORMAT_TABLE: [(i64, &str); 13] = [(1000, "M"),
                                         (900, "CM"),
                                         (500, "D"),
                                         (400, "CD"),
                                         (100, "C"),
                                         (90, "XC"),
                                         (50, "L"),
                                         (40, "XL"),
                                         (10, "X"),
                                         (9, "IX"),
                                         (5, "V"),
                                         (4, "IV"),
                                         (1, "I")];

/// Symbols of the hundreds, tens and units places as `(one, five, ten)`.
const PLACES: [(char, char, char); 3] = [('C', 'D', 'M'), ('X', 'L', 'C'), ('I', 'V', 'X')];

/// Maximum repetitions of a single symbol within one place.
const MAX_REPEAT: usize = 3;

/// Converts between integers and the digits of a numeral system.
///
/// The evaluator only relies on this capability: it asks whether a character
/// may start or continue a number, converts a maximal run of such characters
/// into an integer and formats the final integer back into text.
///
/// Implementations must be stateless; the same converter is shared by every
/// evaluation.
pub trait NumeralConverter {
    /// Returns `true` if `ch` belongs to the numeral alphabet.
    fn is_numeral_char(&self, ch: char) -> bool;

    /// Converts `numeral` into its integer value.
    ///
    /// Returns `None` for any text that is not a well formed numeral. This is
    /// not an error condition of the converter; callers decide how to report
    /// it.
    fn try_parse(&self, numeral: &str) -> Option<i64>;

    /// Formats `value` as a numeral.
    ///
    /// # Errors
    /// Returns [`NumeralError::OutOfRange`] if `value` has no representation.
    fn format(&self, value: i64) -> Result<String, NumeralError>;
}

/// Converter for classical Roman numerals between 1 and 3999.
///
/// Parsing accepts exactly the canonical forms described by
/// `^(M{0,3})(D?C{0,3}|C[DM])(L?X{0,3}|X[LC])(V?I{0,3}|I[VX])$`. The pattern is
/// matched by a four-phase scan (thousands, hundreds, tens, units) instead of a
/// regular expression engine.
///
/// # Example
/// ```
/// use roman_calc::numeral::{NumeralConverter, RomanConverter};
///
/// let roman = RomanConverter;
/// assert_eq!(roman.try_parse("MCMXCIV"), Some(1994));
/// assert_eq!(roman.try_parse("IIII"), None);
/// assert_eq!(roman.format(2990).unwrap(), "MMCMXC");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RomanConverter;

impl NumeralConverter for RomanConverter {
    fn is_numeral_char(&self, ch: char) -> bool {
        face_value(ch).is_some()
    }

    fn try_parse(&self, numeral: &str) -> Option<i64> {
        let groups = split_places(numeral)?;
        Some(groups.into_iter().map(group_value).sum())
    }

    fn format(&self, value: i64) -> Result<String, NumeralError> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(NumeralError::OutOfRange { value });
        }

        let mut remaining = value;
        let mut result = String::new();
        for &(amount, symbols) in &FORMAT_TABLE {
            while remaining >= amount {
                result.push_str(symbols);
                remaining -= amount;
            }
        }
        Ok(result)
    }
}

/// Returns the face value of a single Roman symbol.
///
/// # Example
/// ```
/// use roman_calc::numeral::converter::face_value;
///
/// assert_eq!(face_value('D'), Some(500));
/// assert_eq!(face_value('d'), None);
/// ```
#[must_use]
pub const fn face_value(ch: char) -> Option<i64> {
    match ch {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Splits a numeral into its thousands, hundreds, tens and units groups.
///
/// Returns `None` if the text is empty or does not match the canonical
/// pattern. Every group is a (possibly empty) prefix of what remains after
/// the previous one.
fn split_places(numeral: &str) -> Option<[&str; 4]> {
    if numeral.is_empty() {
        return None;
    }

    let (thousands, mut rest) = take_repeated(numeral, 'M');
    let mut groups = [thousands, "", "", ""];

    for (slot, &(one, five, ten)) in groups[1..].iter_mut().zip(PLACES.iter()) {
        let (group, tail) = take_place(rest, one, five, ten);
        *slot = group;
        rest = tail;
    }

    rest.is_empty().then_some(groups)
}

/// Consumes one place: either a subtractive pair (`one` before `five` or
/// `ten`) or an optional `five` followed by up to three `one`s.
fn take_place(text: &str, one: char, five: char, ten: char) -> (&str, &str) {
    let mut chars = text.chars();
    if chars.next() == Some(one)
       && let Some(next) = chars.next()
       && (next == five || next == ten)
    {
        let len = one.len_utf8() + next.len_utf8();
        return text.split_at(len);
    }

    let five_len = if text.starts_with(five) { five.len_utf8() } else { 0 };
    let (ones, _) = take_repeated(&text[five_len..], one);
    text.split_at(five_len + ones.len())
}

/// Consumes up to three leading occurrences of `symbol`.
fn take_repeated(text: &str, symbol: char) -> (&str, &str) {
    let len = text.chars()
                  .take(MAX_REPEAT)
                  .take_while(|&ch| ch == symbol)
                  .map(char::len_utf8)
                  .sum();
    text.split_at(len)
}

/// Values one positional group.
///
/// A two-symbol group whose first symbol is smaller is subtractive; every
/// other group is additive.
fn group_value(group: &str) -> i64 {
    let values: Vec<i64> = group.chars().filter_map(face_value).collect();
    match values.as_slice() {
        [] => 0,
        [single] => *single,
        [first, second] if first < second => second - first,
        all => all.iter().sum(),
    }
}
