//! # Transform Crate
//!
//! Reshapes the source AST produced by `sexpr-parser` into a target AST whose
//! shape matches C-style call syntax.
//!
//! ## Architecture
//!
//! ```text
//! Source AST → traverse (enter/exit hooks) → Transformer → Target AST
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sexpr_transform::{transform, Node};
//!
//! let source = sexpr_parser::parse_source("(add 2 2)").unwrap();
//! let target = transform(&source).unwrap();
//! assert!(matches!(target.body[0], Node::ExpressionStatement(_)));
//! ```
//!
//! ## Design Principles
//!
//! - **No Back-Pointers**: the list a node appends into is passed down the
//!   traversal, never stored on a source node
//! - **Closed Node Kinds**: both trees are `#[non_exhaustive]` enums; unknown
//!   kinds surface as `TraverseError` instead of being skipped

pub mod ast;
pub mod error;
pub mod transformer;
pub mod traverse;

// Re-exports for convenience
pub use ast::*;
pub use error::TraverseError;
pub use transformer::transform;
pub use traverse::{traverse, NodeRef, Visitor};
