//! # Digit Classification
//!
//! Maps single characters to their numeric digit values. The parser only
//! talks to digits through the [`DigitClassifier`] trait, so a different
//! glyph set can be slotted in without touching the accumulation logic.
//!
//! Only decimal glyphs (`'0'..='9'`) are provided.

use thiserror::Error;

/// Failure to decode a character as a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitError {
    #[error("'{0}' is not a recognized digit glyph")]
    InvalidDigit(char),
}

/// Decides which characters are digits and what they are worth.
pub trait DigitClassifier {
    /// Returns true if `c` is one of the glyphs this classifier understands.
    fn is_digit(&self, c: char) -> bool;

    /// Returns the numeric value of `c`.
    ///
    /// Callers should check [`is_digit`](Self::is_digit) first or be ready
    /// to handle [`DigitError::InvalidDigit`].
    fn digit_value(&self, c: char) -> Result<u8, DigitError>;
}

// ============================================================================
// DECIMAL GLYPHS
// ============================================================================

/// Values indexed by `c - '0'`.
const DECIMAL_VALUES: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// The ten ASCII decimal digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalDigits;

impl DecimalDigits {
    fn slot(c: char) -> Option<usize> {
        let offset = (c as u32).checked_sub('0' as u32)? as usize;
        (offset < DECIMAL_VALUES.len()).then_some(offset)
    }
}

impl DigitClassifier for DecimalDigits {
    fn is_digit(&self, c: char) -> bool {
        Self::slot(c).is_some()
    }

    fn digit_value(&self, c: char) -> Result<u8, DigitError> {
        Self::slot(c)
            .map(|slot| DECIMAL_VALUES[slot])
            .ok_or(DigitError::InvalidDigit(c))
    }
}
