//! # S-expression Compiler
//!
//! Translates nested S-expression calls into C-style function calls.
//!
//! ## Architecture
//!
//! ```text
//! text → tokenize → parse → transform → generate → text
//! ```
//!
//! Each stage consumes the complete output of the previous one and the first
//! error aborts the compilation; there is no partial output.
//!
//! ## Usage
//!
//! ```rust
//! use sexpr_compiler::compile;
//!
//! assert_eq!(compile("(add 2 (subtract 4 2))").unwrap(), "add(2, subtract(4, 2));");
//! ```

use config::constants::CompilerConfig;
use sexpr_codegen::Generator;
use sexpr_parser::parser::Parser;
use thiserror::Error;
use tracing::debug;

// Stage re-exports for callers that want the intermediate trees
pub use sexpr_codegen::{generate, CodegenError};
pub use sexpr_parser::{parse, tokenize, LexError, ParseError, Token, TokenKind};
pub use sexpr_transform::{transform, TraverseError};

/// First failure of any stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("traverse error: {0}")]
    Traverse(#[from] TraverseError),
    #[error("codegen error: {0}")]
    Codegen(#[from] CodegenError),
}

/// Compile with the default configuration.
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_with_config(source, &CompilerConfig::default())
}

/// Compile, taking the callee policy and output separators from `config`.
///
/// ## Example
///
/// ```rust
/// use config::constants::CompilerConfig;
/// use sexpr_compiler::compile_with_config;
///
/// assert_eq!(compile_with_config("(1 2)", &CompilerConfig::default()).unwrap(), "1(2);");
///
/// let strict = CompilerConfig::default().with_strict_callee(true);
/// assert!(compile_with_config("(1 2)", &strict).is_err());
/// ```
pub fn compile_with_config(source: &str, config: &CompilerConfig) -> Result<String, CompileError> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "lexed");

    let program = Parser::new(&tokens)
        .with_strict_callee(config.strict_callee)
        .parse()?;
    debug!(forms = program.body.len(), "parsed");

    let target = transform(&program)?;
    debug!(statements = target.body.len(), "transformed");

    let output = Generator::from_config(config).generate(&target)?;
    debug!(bytes = output.len(), "generated");

    Ok(output)
}
