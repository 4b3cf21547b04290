//! # Source AST
//!
//! Tree produced by the parser: a program of call expressions over number
//! and string literals. Every node is owned by its parent.
//!
//! Nodes serialize with a `"type"` tag naming their kind:
//!
//! ```rust
//! use sexpr_parser::ast::Node;
//!
//! let call = Node::call("add", vec![Node::number("2")]);
//! assert_eq!(call.kind(), "CallExpression");
//! ```

use serde::{Deserialize, Serialize};

/// Root of the source tree; `body` is in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }
}

/// Any node that can appear in a program body or a parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[non_exhaustive]
pub enum Node {
    CallExpression(CallExpression),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

impl Node {
    pub fn call(name: impl Into<String>, params: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression {
            name: name.into(),
            params,
        })
    }

    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral(NumberLiteral {
            value: value.into(),
        })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::StringLiteral(StringLiteral {
            value: value.into(),
        })
    }

    /// Node-kind name, as used in the serialized `"type"` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::CallExpression(_) => "CallExpression",
            Node::NumberLiteral(_) => "NumberLiteral",
            Node::StringLiteral(_) => "StringLiteral",
        }
    }
}

/// `(name params...)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    pub name: String,
    pub params: Vec<Node>,
}

// Nesting depth is unbounded, so teardown walks a worklist instead of
// recursing through nested parameter lists.
impl Drop for CallExpression {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.params);
        while let Some(mut node) = pending.pop() {
            if let Node::CallExpression(call) = &mut node {
                pending.append(&mut call.params);
            }
        }
    }
}

/// Digit string, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: String,
}

/// String contents without the delimiting quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}
