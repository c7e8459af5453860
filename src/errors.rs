//! Parse failures and their diagnostics.
//!
//! Every failure is a [`ParseError`]. Variants that relate to a position in
//! the input carry the input itself as source code together with a labelled
//! span, so a `miette` report can point at the offending character.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Type-safe classification of [`ParseError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    EmptyInput,
    NoDigits,
    InvalidCharacter,
    Overflow,
}

impl ParseErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::EmptyInput => "EmptyInput",
            ParseErrorKind::NoDigits => "NoDigits",
            ParseErrorKind::InvalidCharacter => "InvalidCharacter",
            ParseErrorKind::Overflow => "Overflow",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why an input could not be turned into an `i64`.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("cannot parse an empty string")]
    #[diagnostic(
        code(digitfold::parse::empty_input),
        help("pass at least one decimal digit, optionally preceded by '-'")
    )]
    EmptyInput,

    #[error("no digits follow the sign in '{src}'")]
    #[diagnostic(
        code(digitfold::parse::no_digits),
        help("a sign must be followed by at least one decimal digit")
    )]
    NoDigits {
        #[source_code]
        src: String,
        #[label("sign without digits")]
        span: SourceSpan,
    },

    #[error("invalid character '{character}' at byte {index} in '{src}'")]
    #[diagnostic(
        code(digitfold::parse::invalid_character),
        help("only the digits 0-9 may follow the optional leading '-'")
    )]
    InvalidCharacter {
        character: char,
        index: usize,
        #[source_code]
        src: String,
        #[label("not a decimal digit")]
        span: SourceSpan,
    },

    #[error("'{src}' does not fit in a signed 64-bit integer")]
    #[diagnostic(
        code(digitfold::parse::overflow),
        help("values must lie between -9223372036854775808 and 9223372036854775807")
    )]
    Overflow {
        #[source_code]
        src: String,
        #[label("out of range from this digit on")]
        span: SourceSpan,
    },
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::EmptyInput => ParseErrorKind::EmptyInput,
            ParseError::NoDigits { .. } => ParseErrorKind::NoDigits,
            ParseError::InvalidCharacter { .. } => ParseErrorKind::InvalidCharacter,
            ParseError::Overflow { .. } => ParseErrorKind::Overflow,
        }
    }

    pub(crate) fn no_digits(src: &str, sign_at: usize) -> Self {
        ParseError::NoDigits {
            src: src.to_string(),
            span: SourceSpan::new(sign_at.into(), 1),
        }
    }

    pub(crate) fn invalid_character(src: &str, index: usize, character: char) -> Self {
        ParseError::InvalidCharacter {
            character,
            index,
            src: src.to_string(),
            span: SourceSpan::new(index.into(), character.len_utf8()),
        }
    }

    pub(crate) fn overflow(src: &str, span: SourceSpan) -> Self {
        ParseError::Overflow {
            src: src.to_string(),
            span,
        }
    }
}
