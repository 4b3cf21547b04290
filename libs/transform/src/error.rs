use thiserror::Error;

/// Failure while walking or reshaping a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraverseError {
    /// Node kind the traverser has no rule for.
    #[error("unknown node kind: {kind}")]
    UnknownNode { kind: &'static str },

    /// A container node produced no list for its children to append into.
    #[error("no destination list for children of {kind}")]
    MissingDestination { kind: &'static str },
}
