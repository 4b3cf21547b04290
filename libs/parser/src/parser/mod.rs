//! # S-expression Parser
//!
//! Recursive descent parser over the token stream.
//! Produces the source AST.
//!
//! ## Example
//!
//! ```rust
//! use sexpr_parser::lexer::Lexer;
//! use sexpr_parser::parser::Parser;
//!
//! let tokens = Lexer::new("(add 2 2)").tokenize().unwrap();
//! let program = Parser::new(&tokens).parse().unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

mod call;

use crate::ast::{Node, Program};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use config::constants::{STACKER_STACK_SIZE_BYTES, STACK_RED_ZONE_BYTES};

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser.
///
/// Consumes the token slice exactly once through a cursor that only moves
/// forward.
pub struct Parser<'t> {
    /// Token stream.
    tokens: &'t [Token],
    /// Current token index.
    current: usize,
    /// Reject non-name tokens in call name position.
    strict_callee: bool,
}

impl<'t> Parser<'t> {
    /// Create a new parser. Any token may stand in the call name position
    /// until `with_strict_callee(true)` is requested.
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            strict_callee: false,
        }
    }

    /// Choose whether only a name token may stand in the call name position.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use sexpr_parser::lexer::Lexer;
    /// use sexpr_parser::parser::Parser;
    ///
    /// let tokens = Lexer::new("(1 2)").tokenize().unwrap();
    /// assert!(Parser::new(&tokens).parse().is_ok());
    /// assert!(Parser::new(&tokens).with_strict_callee(true).parse().is_err());
    /// ```
    pub fn with_strict_callee(mut self, strict_callee: bool) -> Self {
        self.strict_callee = strict_callee;
        self
    }

    /// Parse every top-level form into a program.
    ///
    /// ## Errors
    ///
    /// The first `ParseError` encountered; no partial program is returned.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            body.push(self.walk()?);
        }

        Ok(Program::new(body))
    }

    // =========================================================================
    // GRAMMAR
    // =========================================================================

    /// Parse one form: a literal or a parenthesized call.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// form = number | string | "(" name form* ")"
    /// ```
    fn walk(&mut self) -> Result<Node, ParseError> {
        stacker::maybe_grow(STACK_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.walk_form()
        })
    }

    fn walk_form(&mut self) -> Result<Node, ParseError> {
        const EXPECTED: &str = "literal or call";

        let token = self
            .peek()
            .ok_or(ParseError::UnexpectedEof { expected: EXPECTED })?;

        match token.kind {
            TokenKind::Number => {
                self.advance();
                Ok(Node::number(token.value.clone()))
            }
            TokenKind::String => {
                self.advance();
                Ok(Node::string(token.value.clone()))
            }
            TokenKind::Paren if token.is_open_paren() => {
                self.advance();
                self.parse_call()
            }
            _ => Err(ParseError::UnexpectedToken {
                found: token.clone(),
                expected: EXPECTED,
            }),
        }
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token, if any remain.
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    /// Check if every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Advance to next token.
    ///
    /// ## Returns
    ///
    /// The token that was consumed
    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.current += 1;
        Some(token)
    }
}

// =============================================================================
// TESTS
// =============================================================================
