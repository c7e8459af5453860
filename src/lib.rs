//! Strict decimal parsing of signed 64-bit integers.
//!
//! ```
//! assert_eq!(digitfold::parse("-9223372036854775808"), Ok(i64::MIN));
//! assert!(digitfold::parse("9223372036854775808").is_err());
//! ```

pub use crate::digits::{DecimalDigits, DigitClassifier, DigitError};
pub use crate::errors::{ParseError, ParseErrorKind};
pub use crate::parser::{IntegerParser, Sign};

pub mod cli;
pub mod digits;
pub mod errors;
pub mod parser;

/// Parses `input` with the decimal digit classifier.
pub fn parse(input: &str) -> Result<i64, ParseError> {
    IntegerParser::new().parse(input)
}
