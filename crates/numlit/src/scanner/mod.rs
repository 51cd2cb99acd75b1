//! Number-literal scanner: scan, classify, evaluate.
//!
//! Overview
//! - [`scan_number`] is called once per numeric token, with the cursor on a
//!   decimal digit. It consumes the longest valid literal, classifies it as
//!   integer or real, computes the value, and returns everything as one
//!   [`NumberToken`]. Errors are values ([`NumericLiteral::Error`]), never
//!   panics; the cursor is left wherever consumption stopped, with no
//!   rollback.
//! - The scan runs in four steps: whole digits, fractional part, exponent
//!   part, value computation. A small [`LiteralBuilder`] threads the
//!   accumulated text and the classification through the steps; the only
//!   classification mutator widens `Integer` to `Real`, so a literal can
//!   never narrow back once a `.` or `E` has been seen.
//!
//! Lexical fine print
//! - `.` is ambiguous: a decimal point, or the first character of a `..`
//!   range operator. One character of lookahead resolves it — on `..` the
//!   literal ends *before* the dot and both dots are left for the caller.
//!   A literal that ends this way cannot take an exponent either (`5..e`
//!   is `5`, `..`, `e`).
//! - Digit-run requirements are asymmetric, deliberately so: the whole part
//!   must have at least one digit, and so must an exponent once `E`/`e` is
//!   consumed, but the fraction may be empty — `3.` scans as `3.0` while
//!   `3e` is invalid. Callers relying on `3.` being legal exist; do not
//!   tighten this.
//! - Integer overflow detection is a watermark, not a bound check: accumulate
//!   with wrapping arithmetic and stop the first time the running value goes
//!   non-monotonic. A wrap that happens to land above the previous value is
//!   accepted (ten nines scan "successfully"; the eleventh trips the check).
//!   Boundary behavior is load-bearing; keep the rule as-is.

use alloc::string::String;

use crate::{
    cursor::Cursor,
    literal::{ErrorKind, NumberToken, NumericLiteral},
};

/// Largest decimal exponent magnitude (exponent plus whole-digit count) a
/// real literal may carry.
///
/// A fixed scanner constant, not derived from `f32`'s actual exponent range.
pub const MAX_EXPONENT: i64 = 37;

/// Classification of the literal under construction. Widening-only: steps 2
/// and 3 may promote `Integer` to `Real`; nothing demotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Integer,
    Real,
}

/// Per-scan accumulator threaded through the four steps: the consumed text
/// and the provisional classification. Consumed (by value) when the scan
/// resolves, so no partial state escapes.
#[derive(Debug)]
struct LiteralBuilder {
    text: String,
    class: Class,
}

impl LiteralBuilder {
    fn new() -> Self {
        Self {
            text: String::new(),
            class: Class::Integer,
        }
    }

    fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Escalates the classification to `Real`. Idempotent; there is no
    /// inverse.
    fn widen_to_real(&mut self) {
        self.class = Class::Real;
    }

    fn resolve(self, value: NumericLiteral) -> NumberToken {
        NumberToken {
            text: self.text,
            value,
        }
    }

    fn error(self, kind: ErrorKind) -> NumberToken {
        self.resolve(NumericLiteral::Error(kind))
    }
}

/// Scans one numeric literal from the cursor's current position.
///
/// Precondition: the current character is a decimal digit (a non-digit yields
/// `Error(InvalidNumber)` without advancing). Postcondition: the cursor has
/// advanced exactly past the last character of the literal — decimal point,
/// exponent marker, exponent sign, and all digit runs included; on error it
/// sits wherever extraction stopped.
pub fn scan_number<C: Cursor>(cursor: &mut C) -> NumberToken {
    let mut literal = LiteralBuilder::new();

    // Step 1: whole digits. The only place an empty run is fatal.
    let Some(whole_digits) = extract_digits(cursor, &mut literal) else {
        return literal.error(ErrorKind::InvalidNumber);
    };

    // Step 2: fractional part, unless the dot starts a ".." range token.
    let mut fraction_digits = String::new();
    let mut saw_dot_dot = false;
    if cursor.current_char() == '.' {
        if cursor.peek_char() == '.' {
            // ".." belongs to the caller; don't consume either dot.
            saw_dot_dot = true;
        } else {
            literal.widen_to_real();
            literal.push('.');
            cursor.next_char();
            // An empty fraction is tolerated: "3." scans as 3.0. Only the
            // whole part (and an exponent, below) demands a digit.
            fraction_digits = extract_digits(cursor, &mut literal).unwrap_or_default();
        }
    }

    // Step 3: exponent part. Never after a ".." ended the literal.
    let mut exponent_digits = String::new();
    let mut exponent_sign = '+';
    let current = cursor.current_char();
    if !saw_dot_dot && (current == 'E' || current == 'e') {
        literal.widen_to_real();
        literal.push(current);
        let signed = cursor.next_char();
        if signed == '+' || signed == '-' {
            exponent_sign = signed;
            literal.push(signed);
            cursor.next_char();
        }
        // Unlike the fraction, a consumed exponent marker requires digits.
        match extract_digits(cursor, &mut literal) {
            Some(digits) => exponent_digits = digits,
            None => return literal.error(ErrorKind::InvalidNumber),
        }
    }

    // Step 4: value computation, dispatched on the final classification.
    match literal.class {
        Class::Integer => {
            let (value, overflowed) = compute_integer(&whole_digits);
            if overflowed {
                literal.error(ErrorKind::IntegerOutOfRange)
            } else {
                literal.resolve(NumericLiteral::Integer(value))
            }
        }
        Class::Real => {
            let (value, out_of_range) = compute_real(
                &whole_digits,
                &fraction_digits,
                &exponent_digits,
                exponent_sign,
            );
            if out_of_range {
                literal.error(ErrorKind::RealOutOfRange)
            } else {
                literal.resolve(NumericLiteral::Real(value))
            }
        }
    }
}

/// Extracts a maximal run of decimal digits, appending each consumed digit to
/// both the builder's text and the returned run.
///
/// Returns `None` when the current character is not a digit; the cursor does
/// not advance in that case. This is the single append point for raw source
/// text during digit collection.
fn extract_digits<C: Cursor>(cursor: &mut C, literal: &mut LiteralBuilder) -> Option<String> {
    let mut current = cursor.current_char();
    if !current.is_ascii_digit() {
        return None;
    }

    let mut digits = String::new();
    while current.is_ascii_digit() {
        literal.push(current);
        digits.push(current);
        current = cursor.next_char();
    }
    Some(digits)
}

/// Computes the integer value of a digit run, watching for overflow.
///
/// Accumulates left to right with wrapping 32-bit arithmetic and stops at the
/// first step where the running value fails to stay non-decreasing. The
/// returned value is meaningless when `overflowed` is set. Empty input is
/// `(0, false)` — used for absent exponents.
fn compute_integer(digits: &str) -> (i32, bool) {
    if digits.is_empty() {
        return (0, false);
    }

    let mut value: i32 = 0;
    let mut prev_value: i32 = -1;
    for digit in digits.bytes() {
        if value < prev_value {
            break;
        }
        prev_value = value;
        value = value
            .wrapping_mul(10)
            .wrapping_add(i32::from(digit - b'0'));
    }

    if value >= prev_value {
        (value, false)
    } else {
        (0, true)
    }
}

/// Computes the `f32` value of a real literal from its parts.
///
/// The fraction digits continue the mantissa, with the exponent adjusted down
/// by the fraction length. The range gate compares the effective decimal
/// exponent (exponent plus whole-digit count) against [`MAX_EXPONENT`];
/// beyond it the value is reported out of range and left uncomputed. The
/// mantissa accumulates in `f64` and narrows once at the end.
fn compute_real(
    whole_digits: &str,
    fraction_digits: &str,
    exponent_digits: &str,
    exponent_sign: char,
) -> (f32, bool) {
    // Exponent runs are short in practice; the watermark flag of the
    // sub-computation is deliberately ignored here.
    let (exponent, _) = compute_integer(exponent_digits);
    let mut exponent = i64::from(exponent);
    if exponent_sign == '-' {
        exponent = -exponent;
    }

    if !fraction_digits.is_empty() {
        exponent -= fraction_digits.len() as i64;
    }

    if (exponent + whole_digits.len() as i64).abs() > MAX_EXPONENT {
        return (0.0, true);
    }

    let mut mantissa: f64 = 0.0;
    for digit in whole_digits.bytes().chain(fraction_digits.bytes()) {
        mantissa = mantissa * 10.0 + f64::from(digit - b'0');
    }
    if exponent != 0 {
        mantissa *= pow10(exponent);
    }

    #[allow(clippy::cast_possible_truncation)]
    let value = mantissa as f32;
    (value, false)
}

// 10^exp by repeated multiplication; core has no powi.
fn pow10(exp: i64) -> f64 {
    let mut scale = 1.0_f64;
    for _ in 0..exp.unsigned_abs() {
        scale *= 10.0;
    }
    if exp < 0 { 1.0 / scale } else { scale }
}
