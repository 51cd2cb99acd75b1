//! Numeric-literal scanning for hand-written tokenizers.
//!
//! A tokenizer that dispatches on the first character of a token can hand a
//! digit-initial position to [`scan_number`], which consumes the longest valid
//! integer or floating-point literal, computes its value, and reports
//! malformed or out-of-range literals as values rather than panics.
//!
//! The scanner reads through the [`Cursor`] trait (current character, one
//! character of lookahead, advance). [`StrCursor`] is the bundled
//! implementation over a `&str`; callers embedded in a larger lexer can
//! implement [`Cursor`] over their own source abstraction instead.
//!
//! ```rust
//! use numlit::{NumericLiteral, StrCursor, scan_number};
//!
//! let mut cursor = StrCursor::new("3.14, ...");
//! let token = scan_number(&mut cursor);
//! assert_eq!(token.text, "3.14");
//! assert_eq!(token.value, NumericLiteral::Real(3.14));
//! assert_eq!(cursor.rest(), ", ...");
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod literal;
mod scanner;

pub use cursor::{Cursor, EOF_CHAR, StrCursor};
pub use literal::{ErrorKind, NumberToken, NumericLiteral};
pub use scanner::{MAX_EXPONENT, scan_number};
