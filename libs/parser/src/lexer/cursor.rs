//! # Character Cursor
//!
//! Peekable character cursor for the lexer.
//! Tracks the byte offset as it advances.
//!
//! ## Example
//!
//! ```rust
//! use sexpr_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("add");
//! assert_eq!(cursor.peek(), Some('a'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('d'));
//! ```

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with byte offset tracking.
///
/// The offset only ever moves forward; the lexer never backtracks.
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    pub fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// Current byte offset into the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Peek at current character without consuming it.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use sexpr_parser::lexer::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek(), Some('a'));
    /// assert_eq!(cursor.peek(), Some('a'));
    /// ```
    pub fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at end of input
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Advance while predicate is true.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use sexpr_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc123");
    /// cursor.advance_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.peek(), Some('1'));
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Source text from `start` up to the current offset.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }
}

// =============================================================================
// TESTS
// =============================================================================
