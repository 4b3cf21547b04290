//! # Traverser
//!
//! Generic depth-first walk over the source AST with pre-order (`enter`) and
//! post-order (`exit`) hooks.
//!
//! Each hook receives the current node, its parent, and the destination the
//! caller threads through the walk. `enter` returns the destination the
//! node's children are handed, so container nodes can open a fresh one
//! without storing it on the tree.
//!
//! ## Example
//!
//! ```rust
//! use sexpr_transform::{traverse, NodeRef, TraverseError, Visitor};
//!
//! struct CountCalls;
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     type Dest = usize;
//!
//!     fn enter<'d>(
//!         &mut self,
//!         node: NodeRef<'ast>,
//!         _parent: Option<NodeRef<'ast>>,
//!         dest: &'d mut usize,
//!     ) -> Result<&'d mut usize, TraverseError> {
//!         if let NodeRef::CallExpression(_) = node {
//!             *dest += 1;
//!         }
//!         Ok(dest)
//!     }
//! }
//!
//! let program = sexpr_parser::parse_source("(add 2 (subtract 4 2))").unwrap();
//! let mut calls = 0;
//! traverse(&program, &mut calls, &mut CountCalls).unwrap();
//! assert_eq!(calls, 2);
//! ```

use crate::error::TraverseError;
use config::constants::{STACKER_STACK_SIZE_BYTES, STACK_RED_ZONE_BYTES};
use sexpr_parser::ast::{CallExpression, Node, NumberLiteral, Program, StringLiteral};

// =============================================================================
// NODE REF
// =============================================================================

/// Borrowed view of any source node, the program root included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'ast> {
    Program(&'ast Program),
    CallExpression(&'ast CallExpression),
    NumberLiteral(&'ast NumberLiteral),
    StringLiteral(&'ast StringLiteral),
}

impl<'ast> NodeRef<'ast> {
    /// View a body or parameter node.
    ///
    /// ## Errors
    ///
    /// `TraverseError::UnknownNode` for a kind this traverser has no rule for.
    pub fn from_node(node: &'ast Node) -> Result<Self, TraverseError> {
        match node {
            Node::CallExpression(call) => Ok(NodeRef::CallExpression(call)),
            Node::NumberLiteral(number) => Ok(NodeRef::NumberLiteral(number)),
            Node::StringLiteral(string) => Ok(NodeRef::StringLiteral(string)),
            _ => Err(TraverseError::UnknownNode { kind: node.kind() }),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            NodeRef::Program(_) => "Program",
            NodeRef::CallExpression(_) => "CallExpression",
            NodeRef::NumberLiteral(_) => "NumberLiteral",
            NodeRef::StringLiteral(_) => "StringLiteral",
        }
    }

    /// Direct children in order; empty for literals.
    fn children(self) -> &'ast [Node] {
        match self {
            NodeRef::Program(program) => &program.body,
            NodeRef::CallExpression(call) => &call.params,
            NodeRef::NumberLiteral(_) | NodeRef::StringLiteral(_) => &[],
        }
    }
}

// =============================================================================
// VISITOR
// =============================================================================

/// Pre-order and post-order hooks. Both are optional.
pub trait Visitor<'ast> {
    /// Whatever the hooks write into.
    type Dest;

    /// Called before the node's children. The returned destination is the
    /// one every child receives.
    fn enter<'d>(
        &mut self,
        _node: NodeRef<'ast>,
        _parent: Option<NodeRef<'ast>>,
        dest: &'d mut Self::Dest,
    ) -> Result<&'d mut Self::Dest, TraverseError> {
        Ok(dest)
    }

    /// Called after the node's children, with the destination `enter` received.
    fn exit(
        &mut self,
        _node: NodeRef<'ast>,
        _parent: Option<NodeRef<'ast>>,
        _dest: &mut Self::Dest,
    ) -> Result<(), TraverseError> {
        Ok(())
    }
}

// =============================================================================
// TRAVERSAL
// =============================================================================

/// Walk `program` depth-first, starting with `dest` as the root destination.
///
/// Stops at the first hook error.
pub fn traverse<'ast, V>(
    program: &'ast Program,
    dest: &mut V::Dest,
    visitor: &mut V,
) -> Result<(), TraverseError>
where
    V: Visitor<'ast>,
{
    traverse_node(NodeRef::Program(program), None, dest, visitor)
}

fn traverse_node<'ast, V>(
    node: NodeRef<'ast>,
    parent: Option<NodeRef<'ast>>,
    dest: &mut V::Dest,
    visitor: &mut V,
) -> Result<(), TraverseError>
where
    V: Visitor<'ast>,
{
    stacker::maybe_grow(STACK_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
        let child_dest = visitor.enter(node, parent, dest)?;
        for child in node.children() {
            traverse_node(NodeRef::from_node(child)?, Some(node), child_dest, visitor)?;
        }
        visitor.exit(node, parent, dest)
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sexpr_parser::parse_source;

    /// Records hook calls as `enter Kind <- ParentKind` lines.
    struct Recorder;

    fn describe(node: NodeRef<'_>, parent: Option<NodeRef<'_>>) -> String {
        let name = match node {
            NodeRef::CallExpression(call) => format!("{}({})", node.kind(), call.name),
            NodeRef::NumberLiteral(n) => format!("{}({})", node.kind(), n.value),
            NodeRef::StringLiteral(s) => format!("{}({})", node.kind(), s.value),
            NodeRef::Program(_) => node.kind().to_string(),
        };
        let parent = parent.map(|p| p.kind()).unwrap_or("-");
        format!("{name} <- {parent}")
    }

    impl<'ast> Visitor<'ast> for Recorder {
        type Dest = Vec<String>;

        fn enter<'d>(
            &mut self,
            node: NodeRef<'ast>,
            parent: Option<NodeRef<'ast>>,
            dest: &'d mut Vec<String>,
        ) -> Result<&'d mut Vec<String>, TraverseError> {
            dest.push(format!("enter {}", describe(node, parent)));
            Ok(dest)
        }

        fn exit(
            &mut self,
            node: NodeRef<'ast>,
            parent: Option<NodeRef<'ast>>,
            dest: &mut Vec<String>,
        ) -> Result<(), TraverseError> {
            dest.push(format!("exit {}", describe(node, parent)));
            Ok(())
        }
    }

    #[test]
    fn test_pre_and_post_order() {
        let program = parse_source("(add 2 (sub \"x\"))").unwrap();
        let mut events = Vec::new();
        traverse(&program, &mut events, &mut Recorder).unwrap();

        assert_eq!(
            events,
            vec![
                "enter Program <- -",
                "enter CallExpression(add) <- Program",
                "enter NumberLiteral(2) <- CallExpression",
                "exit NumberLiteral(2) <- CallExpression",
                "enter CallExpression(sub) <- CallExpression",
                "enter StringLiteral(x) <- CallExpression",
                "exit StringLiteral(x) <- CallExpression",
                "exit CallExpression(sub) <- CallExpression",
                "exit CallExpression(add) <- Program",
                "exit Program <- -",
            ]
        );
    }

    /// Visitor with no hooks overridden.
    struct Noop;

    impl<'ast> Visitor<'ast> for Noop {
        type Dest = ();
    }

    #[test]
    fn test_default_hooks_do_nothing() {
        let program = parse_source("(a 1)(b 2)").unwrap();
        assert!(traverse(&program, &mut (), &mut Noop).is_ok());
    }

    /// Fails on the first string literal.
    struct RejectStrings;

    impl<'ast> Visitor<'ast> for RejectStrings {
        type Dest = usize;

        fn enter<'d>(
            &mut self,
            node: NodeRef<'ast>,
            _parent: Option<NodeRef<'ast>>,
            dest: &'d mut usize,
        ) -> Result<&'d mut usize, TraverseError> {
            *dest += 1;
            match node {
                NodeRef::StringLiteral(_) => Err(TraverseError::UnknownNode { kind: node.kind() }),
                _ => Ok(dest),
            }
        }
    }

    #[test]
    fn test_hook_error_stops_walk() {
        let program = parse_source("(a \"s\" 1 2 3)").unwrap();
        let mut entered = 0;
        let err = traverse(&program, &mut entered, &mut RejectStrings).unwrap_err();
        assert_eq!(err, TraverseError::UnknownNode { kind: "StringLiteral" });
        assert_eq!(entered, 3);
    }

    #[test]
    fn test_children_of_literal_are_empty() {
        let program = parse_source("7").unwrap();
        let Node::NumberLiteral(number) = &program.body[0] else {
            panic!("expected number literal");
        };
        assert!(NodeRef::NumberLiteral(number).children().is_empty());
    }
}
