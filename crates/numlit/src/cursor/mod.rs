//! Character cursor: the scanner's only collaborator.
//!
//! The scanner never touches source text directly; it sees a stream of
//! `char`s through [`Cursor`] and advances it exactly once per consumed
//! character. End of input is a distinguished sentinel character
//! ([`EOF_CHAR`]) rather than an `Option`, so every scan loop terminates on
//! plain comparisons — the sentinel is not a digit, not `.`, and not `E`/`e`.
//!
//! [`StrCursor`] is the bundled implementation over a `&str` batch. It
//! decodes UTF-8 lazily at the current byte offset (invalid sequences come
//! back as U+FFFD rather than stalling the stream) and maintains line/column
//! counters so an embedding tokenizer can report positions.

use bstr::decode_utf8;

/// Sentinel returned by every cursor operation at or past end of input.
///
/// NUL can never begin or continue a numeric literal, so scan loops need no
/// separate end-of-input branch.
pub const EOF_CHAR: char = '\0';

/// A sequential character stream with one character of lookahead.
///
/// Implementations must be strictly sequential: each `next_char` advances by
/// exactly one character and nothing ever rewinds. A scan owns the cursor for
/// its full duration; interleaving two scans over one cursor is a caller bug.
pub trait Cursor {
    /// The character at the current position, or [`EOF_CHAR`].
    fn current_char(&self) -> char;

    /// The character one past the current position, without advancing.
    fn peek_char(&self) -> char;

    /// Advances one position and returns the *new* current character.
    fn next_char(&mut self) -> char;
}

/// [`Cursor`] over an in-memory `&str`, with position tracking.
#[derive(Debug, Clone)]
pub struct StrCursor<'src> {
    src: &'src str,
    byte_idx: usize,
    char_idx: usize,
    line: usize,
    col: usize,
}

impl<'src> StrCursor<'src> {
    /// Creates a cursor positioned at the first character of `src`.
    #[must_use]
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            byte_idx: 0,
            char_idx: 0,
            line: 1,
            col: 1,
        }
    }

    /// 1-based line of the current position.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the current position.
    #[must_use]
    pub fn column(&self) -> usize {
        self.col
    }

    /// Byte offset of the current position within the source.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.byte_idx
    }

    /// Count of characters consumed so far.
    #[must_use]
    pub fn chars_consumed(&self) -> usize {
        self.char_idx
    }

    /// The unconsumed tail of the source.
    ///
    /// After a scan this starts at the first character past the literal,
    /// e.g. at the `..` of a range expression.
    #[must_use]
    pub fn rest(&self) -> &'src str {
        &self.src[self.byte_idx..]
    }

    // Decode the first UTF-8 scalar at `offset`, replacing invalid sequences.
    fn decode_at(&self, offset: usize) -> Option<(char, usize)> {
        if offset >= self.src.len() {
            return None;
        }
        let (ch, len) = decode_utf8(&self.src.as_bytes()[offset..]);
        if len == 0 {
            return None;
        }
        Some((ch.unwrap_or('\u{FFFD}'), len))
    }

    fn bump_pos(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        self.char_idx += 1;
    }
}

impl Cursor for StrCursor<'_> {
    fn current_char(&self) -> char {
        self.decode_at(self.byte_idx)
            .map_or(EOF_CHAR, |(ch, _)| ch)
    }

    fn peek_char(&self) -> char {
        match self.decode_at(self.byte_idx) {
            Some((_, len)) => self
                .decode_at(self.byte_idx + len)
                .map_or(EOF_CHAR, |(ch, _)| ch),
            None => EOF_CHAR,
        }
    }

    fn next_char(&mut self) -> char {
        if let Some((ch, len)) = self.decode_at(self.byte_idx) {
            self.byte_idx += len;
            self.bump_pos(ch);
        }
        self.current_char()
    }
}

#[cfg(test)]
mod tests;
