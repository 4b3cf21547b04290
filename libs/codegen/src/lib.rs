//! # Codegen Crate
//!
//! Renders the target AST as C-style call text, one statement per line.
//!
//! ```rust
//! use sexpr_codegen::generate;
//! use sexpr_transform::{Node, Program};
//!
//! let program = Program::new(vec![Node::statement(Node::call(
//!     "add",
//!     vec![Node::number("2"), Node::number("2")],
//! ))]);
//! assert_eq!(generate(&program).unwrap(), "add(2, 2);");
//! ```

pub mod error;
pub mod generator;

pub use error::CodegenError;
pub use generator::{generate, Generator};
