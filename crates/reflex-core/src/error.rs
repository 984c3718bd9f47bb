use thiserror::Error;

/// Errors raised while constructing or ticking nodes.
///
/// A misconfigured node is not a failed node: these abort the operation in
/// progress instead of being folded into a `Failure` status, so callers can
/// always tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BtError {
    #[error("missing parameter [{key}] in node `{node}`")]
    MissingParameter { node: String, key: String },

    #[error("invalid value `{value}` for parameter [{key}] in node `{node}`")]
    InvalidParameter {
        node: String,
        key: String,
        value: String,
    },

    #[error("blackboard entry `{key}` not found while ticking node `{node}`")]
    MissingBlackboardEntry { node: String, key: String },
}

pub type Result<T> = std::result::Result<T, BtError>;
