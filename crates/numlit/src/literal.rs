//! The scan result: a classified numeric literal plus its consumed text.

use alloc::string::String;

use thiserror::Error;

/// Why a literal failed to scan. Terminal for the current scan; presentation
/// is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// No digit where one was required: at the start of the literal, or in
    /// the exponent after `E`/`e` (and an optional sign).
    #[error("invalid number")]
    InvalidNumber,
    /// Integer accumulation overflowed 32 bits.
    #[error("integer literal out of range")]
    IntegerOutOfRange,
    /// The decimal exponent magnitude exceeds [`MAX_EXPONENT`].
    ///
    /// [`MAX_EXPONENT`]: crate::MAX_EXPONENT
    #[error("real literal out of range")]
    RealOutOfRange,
}

/// A fully resolved numeric literal.
///
/// The scanner commits to a classification before computing a value, and
/// classification only ever widens from `Integer` to `Real` (a decimal point
/// or exponent marker widens; nothing narrows back).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericLiteral {
    /// An integer literal.
    Integer(i32),
    /// A floating-point literal.
    Real(f32),
    /// A malformed or out-of-range literal. No value was computed; the
    /// partially consumed text is retained for diagnostics.
    Error(ErrorKind),
}

/// The payload produced by one scan: the resolved value and the exact
/// characters consumed, in order, with nothing skipped or read twice.
///
/// A `NumberToken` is fully resolved by the time the scan returns and is
/// immutable thereafter; the surrounding tokenizer embeds it in its own
/// token record.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberToken {
    /// The consumed source text of the literal.
    pub text: String,
    /// The classified value, or the error kind.
    pub value: NumericLiteral,
}

impl NumberToken {
    /// Whether the scan failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.value, NumericLiteral::Error(_))
    }

    /// The error kind, if the scan failed.
    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self.value {
            NumericLiteral::Error(kind) => Some(kind),
            _ => None,
        }
    }
}
