//! # Target AST
//!
//! C-call shaped tree built by the transformer and consumed by the code
//! generator. Top-level calls are wrapped in `ExpressionStatement`; nested
//! calls appear bare as argument values.

use serde::{Deserialize, Serialize};

/// Root of the target tree.
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[non_exhaustive]
pub enum Node {
    ExpressionStatement(ExpressionStatement),
    CallExpression(CallExpression),
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

impl Node {
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

    pub fn call(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression {
            callee: Identifier::new(callee),
            arguments,
        })
    }

    pub fn statement(expression: Node) -> Self {
        Node::ExpressionStatement(ExpressionStatement {
            expression: Box::new(expression),
        })
    }

    /// Node-kind name, as used in the serialized `"type"` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::ExpressionStatement(_) => "ExpressionStatement",
            Node::CallExpression(_) => "CallExpression",
            Node::Identifier(_) => "Identifier",
            Node::NumberLiteral(_) => "NumberLiteral",
            Node::StringLiteral(_) => "StringLiteral",
        }
    }

    /// Argument list of the call this node is or wraps.
    pub fn arguments_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::CallExpression(call) => Some(&mut call.arguments),
            Node::ExpressionStatement(statement) => statement.expression.arguments_mut(),
            Node::Identifier(_) | Node::NumberLiteral(_) | Node::StringLiteral(_) => None,
        }
    }
}

/// A call used as a top-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Node>,
}

// Iterative teardown; a statement wraps a call, so this covers both.
impl Drop for CallExpression {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.arguments);
        while let Some(mut node) = pending.pop() {
            if let Some(arguments) = node.arguments_mut() {
                pending.append(arguments);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}
