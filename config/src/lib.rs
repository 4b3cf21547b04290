//! # Config Crate
//!
//! Centralized configuration for the S-expression to C-style call compiler.
//! The literal tokens of both grammars and the recursion limits live here so
//! the lexer, parser and code generator never scatter their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CompilerConfig, ARGUMENT_SEPARATOR, STATEMENT_TERMINATOR};
//!
//! let config = CompilerConfig::default();
//! assert_eq!(config.argument_separator, ARGUMENT_SEPARATOR);
//! assert_eq!(config.statement_terminator, STATEMENT_TERMINATOR);
//! assert!(!config.strict_callee);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Defaults Match Output Grammar**: `add(2, 2);` one statement per line

pub mod constants;
