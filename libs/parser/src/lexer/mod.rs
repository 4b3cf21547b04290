//! # S-expression Lexer
//!
//! Tokenizes source text into parens, strings, numbers and names.
//!
//! ## Example
//!
//! ```rust
//! use sexpr_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("(add 2 2)").tokenize().unwrap();
//! assert_eq!(tokens[1].kind, TokenKind::Name);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::LexError;
use config::constants::{CLOSE_PAREN, OPEN_PAREN, STRING_DELIMITER};
use tracing::trace;

// =============================================================================
// LEXER
// =============================================================================

/// S-expression lexer.
///
/// Scans the whole input once, front to back, with maximal munch for
/// numbers and names.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Errors
    ///
    /// `LexError::UnexpectedCharacter` for anything outside the grammar,
    /// `LexError::UnterminatedString` when a string runs off the end.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use sexpr_parser::lexer::Lexer;
    ///
    /// assert!(Lexer::new("(add @)").tokenize().is_err());
    /// ```
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while !self.cursor.is_eof() {
            self.cursor.advance_while(is_whitespace);
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token()?;
        }

        Ok(self.tokens)
    }

    /// Scan a single token at the cursor.
    fn scan_token(&mut self) -> Result<(), LexError> {
        let start = self.cursor.offset();
        let Some(c) = self.cursor.peek() else {
            return Ok(());
        };

        match c {
            OPEN_PAREN | CLOSE_PAREN => {
                self.cursor.advance();
                self.push(TokenKind::Paren, c.to_string());
            }
            STRING_DELIMITER => self.scan_string(start)?,
            '0'..='9' => self.scan_run(start, TokenKind::Number, |c| c.is_ascii_digit()),
            'a'..='z' | 'A'..='Z' => {
                self.scan_run(start, TokenKind::Name, |c| c.is_ascii_alphabetic())
            }
            _ => return Err(LexError::UnexpectedCharacter { ch: c, offset: start }),
        }

        Ok(())
    }

    /// Scan a string literal; the delimiters are not part of the payload.
    fn scan_string(&mut self, start: usize) -> Result<(), LexError> {
        self.cursor.advance(); // Opening quote
        let content_start = self.cursor.offset();

        loop {
            match self.cursor.peek() {
                Some(STRING_DELIMITER) => break,
                Some(_) => {
                    self.cursor.advance();
                }
                None => return Err(LexError::UnterminatedString { offset: start }),
            }
        }

        let content = self.cursor.slice_from(content_start).to_string();
        self.cursor.advance(); // Closing quote
        self.push(TokenKind::String, content);
        Ok(())
    }

    /// Scan a maximal run of characters accepted by `accept`.
    fn scan_run(&mut self, start: usize, kind: TokenKind, accept: impl Fn(char) -> bool) {
        self.cursor.advance_while(accept);
        let text = self.cursor.slice_from(start).to_string();
        self.push(kind, text);
    }

    fn push(&mut self, kind: TokenKind, value: String) {
        trace!(kind = kind.display(), value = %value, "token");
        self.tokens.push(Token::new(kind, value));
    }
}

/// Separator between tokens: Unicode whitespace plus the byte order mark,
/// minus NEL (U+0085).
fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().unwrap()
    }

    fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.value.as_str())).collect()
    }

    #[test]
    fn test_tokenize_nested_call() {
        let tokens = tokenize("(add 2 (subtract 4 2))");
        assert_eq!(
            pairs(&tokens),
            vec![
                (TokenKind::Paren, "("),
                (TokenKind::Name, "add"),
                (TokenKind::Number, "2"),
                (TokenKind::Paren, "("),
                (TokenKind::Name, "subtract"),
                (TokenKind::Number, "4"),
                (TokenKind::Number, "2"),
                (TokenKind::Paren, ")"),
                (TokenKind::Paren, ")"),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n  ").is_empty());
    }

    #[test]
    fn test_leading_byte_order_mark_is_skipped() {
        let tokens = tokenize("\u{feff}(add 2 2)");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], Token::new(TokenKind::Paren, "("));
    }

    #[test]
    fn test_unicode_spaces_separate_tokens() {
        let tokens = tokenize("(f\u{a0}1\u{3000}2)");
        assert_eq!(
            pairs(&tokens),
            vec![
                (TokenKind::Paren, "("),
                (TokenKind::Name, "f"),
                (TokenKind::Number, "1"),
                (TokenKind::Number, "2"),
                (TokenKind::Paren, ")"),
            ]
        );
    }

    #[test]
    fn test_next_line_control_is_not_whitespace() {
        assert_eq!(
            Lexer::new("(f\u{85}1)").tokenize().unwrap_err(),
            LexError::UnexpectedCharacter { ch: '\u{85}', offset: 2 }
        );
    }

    #[test]
    fn test_tokenize_string_strips_quotes() {
        let tokens = tokenize("(foo \"bar baz\")");
        assert_eq!(tokens[2], Token::new(TokenKind::String, "bar baz"));
    }

    #[test]
    fn test_tokenize_empty_string() {
        let tokens = tokenize("\"\"");
        assert_eq!(tokens, vec![Token::new(TokenKind::String, "")]);
    }

    #[test]
    fn test_string_keeps_parens_and_symbols_verbatim() {
        let tokens = tokenize("\"(@ 1)\"");
        assert_eq!(tokens, vec![Token::new(TokenKind::String, "(@ 1)")]);
    }

    #[test]
    fn test_maximal_munch_splits_letters_and_digits() {
        let tokens = tokenize("abc123def");
        assert_eq!(
            pairs(&tokens),
            vec![
                (TokenKind::Name, "abc"),
                (TokenKind::Number, "123"),
                (TokenKind::Name, "def"),
            ]
        );
    }

    #[test]
    fn test_names_are_case_insensitive_letters() {
        let tokens = tokenize("AddTwo");
        assert_eq!(tokens, vec![Token::new(TokenKind::Name, "AddTwo")]);
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("(add @)").tokenize().unwrap_err();
        assert_eq!(err, LexError::UnexpectedCharacter { ch: '@', offset: 5 });
    }

    #[test]
    fn test_underscore_and_sign_are_rejected() {
        assert!(matches!(
            Lexer::new("foo_bar").tokenize(),
            Err(LexError::UnexpectedCharacter { ch: '_', .. })
        ));
        assert!(matches!(
            Lexer::new("-1").tokenize(),
            Err(LexError::UnexpectedCharacter { ch: '-', offset: 0 })
        ));
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("(foo \"bar)").tokenize().unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { offset: 5 });
    }
}
