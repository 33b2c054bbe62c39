use thiserror::Error;

/// Precondition violations, reported before any simulation step runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpreadError{
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter{
        name: &'static str,
        reason: String,
    },
    /// A seed (or edge endpoint) that is not a vertex of the network.
    #[error("node {node} is not part of the network")]
    UnknownNode{
        node: String,
    },
}

impl SpreadError{
    pub(crate) fn probability(name: &'static str, value: f64) -> Self
    {
        Self::InvalidParameter{
            name,
            reason: format!("probability must lie in [0, 1], got {value}")
        }
    }

    pub(crate) fn unknown_node<Id: std::fmt::Debug>(node: &Id) -> Self
    {
        Self::UnknownNode{
            node: format!("{node:?}")
        }
    }
}
