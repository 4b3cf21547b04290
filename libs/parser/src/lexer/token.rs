//! # Tokens
//!
//! Token types for the S-expression lexer.
//!
//! ## Example
//!
//! ```rust
//! use sexpr_parser::lexer::{Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Number, "10");
//! assert_eq!(token.kind, TokenKind::Number);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// `value` holds the literal paren for parens, the matched run for numbers
/// and names, and the text between the quotes for strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token type.
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Token payload.
    pub value: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Check if token is `(`.
    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.value == "("
    }

    /// Check if token is `)`.
    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.value == ")"
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind.display(), self.value)
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// `(` or `)`
    Paren,
    /// String literal like `"bar"`
    String,
    /// Digit run like `42`
    Number,
    /// Letter run like `add`
    Name,
}

impl TokenKind {
    /// Human-readable name for error messages.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Paren => "paren",
            Self::String => "string",
            Self::Number => "number",
            Self::Name => "name",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paren_predicates() {
        assert!(Token::new(TokenKind::Paren, "(").is_open_paren());
        assert!(Token::new(TokenKind::Paren, ")").is_close_paren());
        assert!(!Token::new(TokenKind::Name, "(").is_open_paren());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenKind::Name, "add").to_string(), "name 'add'");
    }

    #[test]
    fn test_token_serializes_with_type_field() {
        let json = serde_json::to_value(Token::new(TokenKind::Paren, "(")).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "paren", "value": "(" }));
    }
}
