//! Error types for topology generation.

/// Errors produced while generating graphs or registering topology elements.
///
/// Parameter validation lives in the generator functions; registration
/// failures come from the topology itself. Callers propagate these
/// unchanged, there is no recovery path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TopologyError {
    #[error("tree fanout must be at least 1")]
    InvalidFanout,

    #[error("edge probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("element '{0}' is already registered")]
    DuplicateElement(String),

    #[error("link endpoint '{0}' is not a registered element")]
    UnknownElement(String),

    #[error("unknown topology type '{name}' (known types: {known})")]
    UnknownTopology { name: String, known: String },

    #[error("invalid parameter '{key}': {reason}")]
    InvalidParameter { key: String, reason: String },
}
