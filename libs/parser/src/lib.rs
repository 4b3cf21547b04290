//! # S-expression Parser
//!
//! Front end of the S-expression to C-style call compiler.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Source AST
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sexpr_parser::{parse, tokenize};
//!
//! let tokens = tokenize("(add 2 2)").unwrap();
//! let program = parse(&tokens).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the pipeline:
//!
//! ```text
//! sexpr-parser → sexpr-transform → sexpr-codegen → sexpr-compiler
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export public API
pub use ast::{CallExpression, Node, NumberLiteral, Program, StringLiteral};
pub use error::{LexError, ParseError, SyntaxError};
pub use lexer::{Token, TokenKind};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Split source text into tokens.
///
/// ## Example
///
/// ```rust
/// use sexpr_parser::{tokenize, TokenKind};
///
/// let tokens = tokenize("(foo \"bar\")").unwrap();
/// assert_eq!(tokens[2].kind, TokenKind::String);
/// assert_eq!(tokens[2].value, "bar");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    lexer::Lexer::new(source).tokenize()
}

/// Parse a token sequence; any token may name a call.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    parser::Parser::new(tokens).parse()
}

/// Tokenize and parse in one step.
///
/// ## Example
///
/// ```rust
/// use sexpr_parser::{parse_source, SyntaxError};
///
/// assert!(matches!(parse_source("(add @)"), Err(SyntaxError::Lex(_))));
/// assert!(matches!(parse_source("(add 2"), Err(SyntaxError::Parse(_))));
/// ```
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        let program = parse_source("(add 2 (subtract 4 2))").unwrap();
        assert_eq!(program.body.len(), 1);
        assert_eq!(program.body[0].kind(), "CallExpression");
    }

    #[test]
    fn test_whitespace_between_tokens_is_free() {
        assert_eq!(
            parse_source(" ( add\n2\t( subtract 4 2 ) ) ").unwrap(),
            parse_source("(add 2 (subtract 4 2))").unwrap()
        );
    }
}
