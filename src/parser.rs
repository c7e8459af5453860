//! # Integer Parsing
//!
//! Turns a decimal string into an `i64` in a single left-to-right fold.
//!
//! ## Overflow detection
//!
//! Each step computes `acc * 10 + digit`. Most accumulators are far enough
//! from the ends of the `i64` range that the step cannot overflow, so a cheap
//! comparison against a precomputed threshold gates an exact check that only
//! runs near the boundary. The exact check accounts for the asymmetry of
//! two's complement: `i64::MIN` has no positive counterpart, so the largest
//! admissible last digit is 7 for positive values and 8 for negative ones.

use miette::SourceSpan;

use crate::digits::{DecimalDigits, DigitClassifier};
use crate::errors::ParseError;

const RADIX: i64 = 10;

// Accumulators beyond these thresholds might overflow on the next step.
const POSITIVE_CHECK_THRESHOLD: i64 = i64::MAX / RADIX - 9;
const NEGATIVE_CHECK_THRESHOLD: i64 = i64::MIN / RADIX + 9;

// Largest magnitude accumulator that can still take another digit.
const LAST_SAFE_POSITIVE: i64 = i64::MAX / RADIX;
const LAST_SAFE_NEGATIVE: i64 = i64::MIN / RADIX;

const LAST_DIGIT_POSITIVE: i64 = i64::MAX % RADIX;
const LAST_DIGIT_NEGATIVE: i64 = -(i64::MIN % RADIX);

/// Sign of the value being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// The scaling factor applied to every digit: `1` or `-1`.
    pub fn factor(self) -> i64 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    /// Distance from `acc` to the last accumulator that can safely take one
    /// more digit. Negative once `acc` is already past it.
    fn headroom(self, acc: i64) -> i64 {
        match self {
            Sign::Positive => LAST_SAFE_POSITIVE - acc,
            Sign::Negative => acc - LAST_SAFE_NEGATIVE,
        }
    }

    fn last_digit_bound(self) -> i64 {
        match self {
            Sign::Positive => LAST_DIGIT_POSITIVE,
            Sign::Negative => LAST_DIGIT_NEGATIVE,
        }
    }
}

/// A validated digit and where it sits in the input.
#[derive(Debug, Clone, Copy)]
struct Digit {
    value: i64,
    span: SourceSpan,
}

/// Parses decimal strings into `i64` values.
///
/// The parser holds no state between calls and can be shared freely
/// between threads.
///
/// ```
/// use digitfold::IntegerParser;
///
/// let parser = IntegerParser::new();
/// assert_eq!(parser.parse("-42").unwrap(), -42);
/// assert!(parser.parse("4x2").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntegerParser<C = DecimalDigits> {
    classifier: C,
}

impl IntegerParser {
    pub fn new() -> Self {
        Self {
            classifier: DecimalDigits,
        }
    }
}

impl<C: DigitClassifier> IntegerParser<C> {
    /// Builds a parser that recognises digits through `classifier`.
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Parses `input` as an optionally negative decimal integer.
    ///
    /// Leading zeros are allowed. No whitespace is trimmed and a leading `+`
    /// is rejected like any other non-digit.
    pub fn parse(&self, input: &str) -> Result<i64, ParseError> {
        if input.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (sign, start) = detect_sign(input);
        let digits = self.normalize(input, start)?;
        match digits.split_first() {
            Some((first, rest)) => accumulate(input, sign, first, rest),
            None => Err(ParseError::no_digits(input, 0)),
        }
    }

    /// Validates everything after the sign and decodes it into digits.
    /// The result is empty when nothing follows the sign.
    fn normalize(&self, input: &str, start: usize) -> Result<Vec<Digit>, ParseError> {
        let mut digits = Vec::with_capacity(input.len() - start);
        for (offset, c) in input[start..].char_indices() {
            let index = start + offset;
            if !self.classifier.is_digit(c) {
                return Err(ParseError::invalid_character(input, index, c));
            }
            let value = self
                .classifier
                .digit_value(c)
                .map_err(|_| ParseError::invalid_character(input, index, c))?;
            digits.push(Digit {
                value: i64::from(value),
                span: SourceSpan::new(index.into(), c.len_utf8()),
            });
        }
        Ok(digits)
    }
}

fn detect_sign(input: &str) -> (Sign, usize) {
    if input.starts_with('-') {
        (Sign::Negative, 1)
    } else {
        (Sign::Positive, 0)
    }
}

fn accumulate(input: &str, sign: Sign, first: &Digit, rest: &[Digit]) -> Result<i64, ParseError> {
    let mut acc = sign.factor() * first.value;
    for digit in rest {
        let near_boundary = acc > POSITIVE_CHECK_THRESHOLD || acc < NEGATIVE_CHECK_THRESHOLD;
        if near_boundary && !accepts_next_digit(acc, digit.value, sign) {
            return Err(ParseError::overflow(input, digit.span));
        }
        acc = acc * RADIX + sign.factor() * digit.value;
    }
    Ok(acc)
}

/// Exact check: can `acc * 10 + sign * next` be represented?
fn accepts_next_digit(acc: i64, next: i64, sign: Sign) -> bool {
    let headroom = sign.headroom(acc);
    headroom > 0 || (headroom == 0 && next <= sign.last_digit_bound())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::DigitError;
    use crate::errors::ParseErrorKind;

    #[test]
    fn test_boundary_constants() {
        assert_eq!(LAST_SAFE_POSITIVE, 922_337_203_685_477_580);
        assert_eq!(LAST_SAFE_NEGATIVE, -922_337_203_685_477_580);
        assert_eq!(LAST_DIGIT_POSITIVE, 7);
        assert_eq!(LAST_DIGIT_NEGATIVE, 8);
        assert!(POSITIVE_CHECK_THRESHOLD < LAST_SAFE_POSITIVE);
        assert!(NEGATIVE_CHECK_THRESHOLD > LAST_SAFE_NEGATIVE);
    }

    #[test]
    fn test_exact_check_at_the_last_safe_accumulator() {
        assert!(accepts_next_digit(LAST_SAFE_POSITIVE, 7, Sign::Positive));
        assert!(!accepts_next_digit(LAST_SAFE_POSITIVE, 8, Sign::Positive));
        assert!(accepts_next_digit(LAST_SAFE_NEGATIVE, 8, Sign::Negative));
        assert!(!accepts_next_digit(LAST_SAFE_NEGATIVE, 9, Sign::Negative));
    }

    #[test]
    fn test_exact_check_past_the_last_safe_accumulator() {
        assert!(!accepts_next_digit(LAST_SAFE_POSITIVE + 1, 0, Sign::Positive));
        assert!(!accepts_next_digit(LAST_SAFE_NEGATIVE - 1, 0, Sign::Negative));
    }

    #[test]
    fn test_exact_check_inside_the_threshold_band() {
        // Between the cheap threshold and the last safe accumulator any digit fits.
        assert!(accepts_next_digit(POSITIVE_CHECK_THRESHOLD + 1, 9, Sign::Positive));
        assert!(accepts_next_digit(NEGATIVE_CHECK_THRESHOLD - 1, 9, Sign::Negative));
    }

    #[test]
    fn test_negative_values_near_the_threshold_parse() {
        let parser = IntegerParser::new();
        assert_eq!(
            parser.parse("-9223372036854775750"),
            Ok(-9_223_372_036_854_775_750)
        );
        assert_eq!(
            parser.parse("-9223372036854775799"),
            Ok(-9_223_372_036_854_775_799)
        );
    }

    #[test]
    fn test_sign_detection() {
        assert_eq!(detect_sign("-12"), (Sign::Negative, 1));
        assert_eq!(detect_sign("12"), (Sign::Positive, 0));
        assert_eq!(detect_sign("+12"), (Sign::Positive, 0));
        assert_eq!(Sign::Negative.factor(), -1);
    }

    #[test]
    fn test_overflow_span_points_at_the_digit_that_overflowed() {
        let err = IntegerParser::new()
            .parse("-92233720368547758090")
            .unwrap_err();
        match err {
            ParseError::Overflow { span, .. } => {
                assert_eq!(span.offset(), 19);
                assert_eq!(span.len(), 1);
            }
            other => panic!("expected overflow, got {other:?}"),
        }
    }

    #[test]
    fn test_lone_sign_has_no_digits() {
        let parser = IntegerParser::new();
        assert_eq!(parser.normalize("-", 1).unwrap().len(), 0);
        assert_eq!(parser.parse("-"), Err(ParseError::no_digits("-", 0)));
    }

    #[test]
    fn test_validation_runs_before_accumulation() {
        // The bad character comes after digits that would already overflow.
        let err = IntegerParser::new()
            .parse("99999999999999999999x")
            .unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidCharacter);
    }

    /// Only recognises the binary glyphs, but keeps decimal weighting.
    struct BinaryGlyphs;

    impl DigitClassifier for BinaryGlyphs {
        fn is_digit(&self, c: char) -> bool {
            matches!(c, '0' | '1')
        }

        fn digit_value(&self, c: char) -> Result<u8, DigitError> {
            match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(DigitError::InvalidDigit(other)),
            }
        }
    }

    #[test]
    fn test_parser_defers_to_its_classifier() {
        let parser = IntegerParser::with_classifier(BinaryGlyphs);
        assert_eq!(parser.parse("-101"), Ok(-101));
        assert_eq!(
            parser.parse("121").unwrap_err(),
            ParseError::invalid_character("121", 1, '2')
        );
    }

    /// Claims every character is a digit but can only decode '5'.
    struct Inconsistent;

    impl DigitClassifier for Inconsistent {
        fn is_digit(&self, _c: char) -> bool {
            true
        }

        fn digit_value(&self, c: char) -> Result<u8, DigitError> {
            if c == '5' {
                Ok(5)
            } else {
                Err(DigitError::InvalidDigit(c))
            }
        }
    }

    #[test]
    fn test_undecodable_digit_becomes_invalid_character() {
        let parser = IntegerParser::with_classifier(Inconsistent);
        assert_eq!(parser.parse("55"), Ok(55));
        assert_eq!(
            parser.parse("5q").unwrap_err(),
            ParseError::invalid_character("5q", 1, 'q')
        );
    }
}
