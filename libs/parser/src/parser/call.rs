//! # Call Parsing
//!
//! Parses the inside of a call form, after its opening paren.

use super::Parser;
use crate::ast::Node;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use tracing::trace;

impl<'t> Parser<'t> {
    /// Parse a call whose `(` was just consumed.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// call = "(" name form* ")"
    /// ```
    ///
    /// ## Example
    ///
    /// ```text
    /// (foo)
    /// (add 2 2)
    /// (add 2 (subtract 4 2))
    /// ```
    pub(super) fn parse_call(&mut self) -> Result<Node, ParseError> {
        let name = self
            .advance()
            .ok_or(ParseError::UnexpectedEof { expected: "call name" })?;

        if self.strict_callee && name.kind != TokenKind::Name {
            return Err(ParseError::InvalidCallee {
                found: name.clone(),
            });
        }
        trace!(name = %name.value, "call");

        let mut params = Vec::new();
        loop {
            match self.peek() {
                Some(token) if token.is_close_paren() => {
                    self.advance();
                    break;
                }
                Some(_) => params.push(self.walk()?),
                None => return Err(ParseError::UnexpectedEof { expected: "')'" }),
            }
        }

        Ok(Node::call(name.value.clone(), params))
    }
}

// =============================================================================
// TESTS
// =============================================================================
