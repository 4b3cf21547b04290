//! # Source to Target Transformation
//!
//! Drives the traverser over the source AST and builds the target AST.
//!
//! ## Example
//!
//! ```rust
//! use sexpr_transform::{transform, Node};
//!
//! let source = sexpr_parser::parse_source("(add 2 (subtract 4 2))").unwrap();
//! let target = transform(&source).unwrap();
//! assert_eq!(
//!     target.body,
//!     vec![Node::statement(Node::call(
//!         "add",
//!         vec![
//!             Node::number("2"),
//!             Node::call("subtract", vec![Node::number("4"), Node::number("2")]),
//!         ],
//!     ))]
//! );
//! ```

use crate::ast::{Node, Program};
use crate::error::TraverseError;
use crate::traverse::{traverse, NodeRef, Visitor};
use sexpr_parser::ast::Program as SourceProgram;
use tracing::trace;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Transform a source program into a target program.
///
/// ## Returns
///
/// `Result<Program, TraverseError>` - target tree on success
pub fn transform(source: &SourceProgram) -> Result<Program, TraverseError> {
    let mut body = Vec::new();
    traverse(source, &mut body, &mut Transformer)?;
    Ok(Program::new(body))
}

// =============================================================================
// VISITOR
// =============================================================================

/// Appends each translated node to the list it is handed.
struct Transformer;

impl<'ast> Visitor<'ast> for Transformer {
    type Dest = Vec<Node>;

    fn enter<'d>(
        &mut self,
        node: NodeRef<'ast>,
        parent: Option<NodeRef<'ast>>,
        dest: &'d mut Vec<Node>,
    ) -> Result<&'d mut Vec<Node>, TraverseError> {
        match node {
            NodeRef::Program(_) => Ok(dest),
            NodeRef::NumberLiteral(number) => {
                dest.push(Node::number(number.value.as_str()));
                Ok(dest)
            }
            NodeRef::StringLiteral(string) => {
                dest.push(Node::string(string.value.as_str()));
                Ok(dest)
            }
            NodeRef::CallExpression(call) => {
                trace!(name = %call.name, top_level = is_top_level(parent), "call");

                let expression = Node::call(call.name.as_str(), Vec::new());
                if is_top_level(parent) {
                    dest.push(Node::statement(expression));
                } else {
                    dest.push(expression);
                }

                // Children append into the arguments of the node just pushed.
                dest.last_mut()
                    .and_then(Node::arguments_mut)
                    .ok_or(TraverseError::MissingDestination { kind: node.kind() })
            }
        }
    }
}

/// A call directly under the program root is a statement.
fn is_top_level(parent: Option<NodeRef<'_>>) -> bool {
    matches!(parent, Some(NodeRef::Program(_)))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sexpr_parser::parse_source;

    fn transform_source(source: &str) -> Program {
        transform(&parse_source(source).unwrap()).unwrap()
    }

    #[test]
    fn test_transform_empty() {
        assert!(transform_source("").body.is_empty());
    }

    #[test]
    fn test_top_level_calls_become_statements() {
        let target = transform_source("(a 1)(b 2)");
        assert_eq!(
            target.body,
            vec![
                Node::statement(Node::call("a", vec![Node::number("1")])),
                Node::statement(Node::call("b", vec![Node::number("2")])),
            ]
        );
    }

    #[test]
    fn test_nested_calls_stay_bare() {
        let target = transform_source("(f (g (h)))");
        assert_eq!(
            target.body,
            vec![Node::statement(Node::call(
                "f",
                vec![Node::call("g", vec![Node::call("h", vec![])])],
            ))]
        );
    }

    #[test]
    fn test_argument_order_is_preserved() {
        let target = transform_source("(f 1 \"two\" (g) 4)");
        assert_eq!(
            target.body,
            vec![Node::statement(Node::call(
                "f",
                vec![
                    Node::number("1"),
                    Node::string("two"),
                    Node::call("g", vec![]),
                    Node::number("4"),
                ],
            ))]
        );
    }

    #[test]
    fn test_top_level_literals_are_kept() {
        let target = transform_source("42 \"s\"");
        assert_eq!(target.body, vec![Node::number("42"), Node::string("s")]);
    }

    #[test]
    fn test_source_tree_is_untouched() {
        let source = parse_source("(add 2 (subtract 4 2))").unwrap();
        let before = source.clone();
        transform(&source).unwrap();
        assert_eq!(source, before);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let source = parse_source("(add 2 (subtract 4 2))").unwrap();
        assert_eq!(transform(&source).unwrap(), transform(&source).unwrap());
    }
}
