//! # Syntax Errors
//!
//! Error types for the lexer and the parser. Both stages abort on the first
//! error; there is no recovery.
//!
//! ## Example
//!
//! ```rust
//! use sexpr_parser::error::ParseError;
//!
//! let error = ParseError::UnexpectedEof { expected: "')'" };
//! assert_eq!(error.to_string(), "unexpected end of input, expected ')'");
//! ```

use crate::lexer::Token;
use thiserror::Error;

// =============================================================================
// LEX ERROR
// =============================================================================

/// Failure while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Character outside the grammar.
    #[error("unexpected character '{ch}' at byte {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },

    /// String literal with no closing quote.
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },
}

// =============================================================================
// PARSE ERROR
// =============================================================================

/// Token sequence that does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token where a literal, call or closing paren was required.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        /// Token that was found.
        found: Token,
        /// Description of what was expected.
        expected: &'static str,
    },

    /// Ran out of tokens inside a form.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: &'static str,
    },

    /// Call name position held something other than a name.
    #[error("call name must be a name, found {found}")]
    InvalidCallee {
        /// Token in the name position.
        found: Token,
    },
}

// =============================================================================
// SYNTAX ERROR
// =============================================================================

/// Either front-end failure, for callers that lex and parse in one step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// Lexing failed.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

// =============================================================================
// TESTS
// =============================================================================
