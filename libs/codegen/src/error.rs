use thiserror::Error;

/// Failure while rendering the target tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// Node kind the generator has no rendering for.
    #[error("cannot generate code for node kind: {kind}")]
    UnsupportedNode { kind: &'static str },
}
