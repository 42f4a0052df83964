//! Character cursor over the pattern text.
//!
//! Maintains byte position while iterating the pattern rune by rune,
//! UTF-8 aware, with a one-rune lookahead used by the `CLASS_RANGE` and
//! escape states to decide which state to enter next without consuming.

/// A cursor for traversing a pattern string rune by rune.
///
/// # Example
///
/// ```
/// use regionc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a|b");
/// assert_eq!(cursor.current(), 'a');
/// cursor.advance();
/// assert_eq!(cursor.current(), '|');
/// ```
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
}

/// Sentinel returned once the cursor runs past the end of the pattern.
pub const EOF: char = '\0';

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, position: 0 }
    }

    /// Current byte offset, used for error positions.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Rune at the cursor, or [`EOF`] past the end of input.
    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// Rune `offset` runes ahead of the cursor (0 = current), or [`EOF`].
    pub fn peek(&self, offset: usize) -> char {
        self.source[self.position..].chars().nth(offset).unwrap_or(EOF)
    }

    /// Advances past the current rune, returning it.
    pub fn advance(&mut self) -> char {
        let c = self.current();
        if c != EOF {
            self.position += c.len_utf8();
        }
        c
    }
}
