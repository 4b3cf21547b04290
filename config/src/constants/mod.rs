//! Centralized configuration values shared across the compiler pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// SOURCE GRAMMAR
// =============================================================================

/// Character opening a call form in the source grammar.
///
/// # Examples
/// ```
/// use config::constants::OPEN_PAREN;
/// assert_eq!(OPEN_PAREN, '(');
/// ```
pub const OPEN_PAREN: char = '(';

/// Character closing a call form in the source grammar.
pub const CLOSE_PAREN: char = ')';

/// Delimiter surrounding string literals, in both the source and the output.
///
/// # Examples
/// ```
/// use config::constants::STRING_DELIMITER;
/// assert_eq!(format!("{0}bar{0}", STRING_DELIMITER), "\"bar\"");
/// ```
pub const STRING_DELIMITER: char = '"';

// =============================================================================
// OUTPUT GRAMMAR
// =============================================================================

/// Separator placed between rendered call arguments.
///
/// # Examples
/// ```
/// use config::constants::ARGUMENT_SEPARATOR;
/// assert_eq!(["2", "2"].join(ARGUMENT_SEPARATOR), "2, 2");
/// ```
pub const ARGUMENT_SEPARATOR: &str = ", ";

/// Suffix appended to every top-level statement.
pub const STATEMENT_TERMINATOR: &str = ";";

/// Separator placed between top-level statements.
pub const LINE_SEPARATOR: &str = "\n";

// =============================================================================
// RECURSION LIMITS
// =============================================================================

/// Remaining stack below which recursive stages grow the stack with `stacker`.
///
/// # Examples
/// ```
/// use config::constants::{STACK_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACK_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACK_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

// =============================================================================
// COMPILER CONFIG
// =============================================================================

/// Immutable snapshot of the settings a single compilation runs with.
///
/// # Examples
/// ```
/// use config::constants::CompilerConfig;
/// let config = CompilerConfig::default();
/// assert_eq!(config.line_separator, "\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Reject calls whose name position holds anything but a name token.
    pub strict_callee: bool,
    /// Text placed between rendered arguments.
    pub argument_separator: String,
    /// Text appended to each top-level statement.
    pub statement_terminator: String,
    /// Text placed between top-level statements.
    pub line_separator: String,
}

impl CompilerConfig {
    /// Builds a configuration, rejecting empty separators.
    ///
    /// # Examples
    /// ```
    /// use config::constants::CompilerConfig;
    /// let cfg = CompilerConfig::new(true, ",", ";", "\n").expect("valid config");
    /// assert!(cfg.strict_callee);
    /// assert!(CompilerConfig::new(true, "", ";", "\n").is_err());
    /// ```
    pub fn new(
        strict_callee: bool,
        argument_separator: &str,
        statement_terminator: &str,
        line_separator: &str,
    ) -> Result<Self, ConfigError> {
        if argument_separator.is_empty() {
            return Err(ConfigError::EmptyArgumentSeparator);
        }
        if line_separator.is_empty() {
            return Err(ConfigError::EmptyLineSeparator);
        }
        Ok(Self {
            strict_callee,
            argument_separator: argument_separator.to_string(),
            statement_terminator: statement_terminator.to_string(),
            line_separator: line_separator.to_string(),
        })
    }

    /// Same settings with a different callee policy.
    pub fn with_strict_callee(mut self, strict_callee: bool) -> Self {
        self.strict_callee = strict_callee;
        self
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            strict_callee: false,
            argument_separator: ARGUMENT_SEPARATOR.to_string(),
            statement_terminator: STATEMENT_TERMINATOR.to_string(),
            line_separator: LINE_SEPARATOR.to_string(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Arguments would run together.
    EmptyArgumentSeparator,
    /// Statements would run together.
    EmptyLineSeparator,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyArgumentSeparator => {
                write!(f, "argument_separator must not be empty")
            }
            ConfigError::EmptyLineSeparator => {
                write!(f, "line_separator must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
