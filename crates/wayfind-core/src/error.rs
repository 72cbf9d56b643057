use std::fmt;

use crate::network::NodeId;

/// Errors that can occur when assembling a [`RoadNetwork`](crate::RoadNetwork).
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// A road references a node that was never added.
    UnknownNode(NodeId),
    /// A road needs at least two nodes to form a segment.
    RoadTooShort { len: usize },
    /// The metric scale must be finite and strictly positive.
    InvalidScale(f64),
    /// A node coordinate is NaN or infinite.
    InvalidCoord(NodeId),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "road references unknown node {id}"),
            Self::RoadTooShort { len } => {
                write!(f, "road has {len} node(s), at least 2 are required")
            }
            Self::InvalidScale(s) => write!(f, "invalid metric scale {s}"),
            Self::InvalidCoord(id) => write!(f, "node {id} has a non-finite coordinate"),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            NetworkError::UnknownNode(NodeId(7)).to_string(),
            "road references unknown node #7"
        );
        assert_eq!(
            NetworkError::RoadTooShort { len: 1 }.to_string(),
            "road has 1 node(s), at least 2 are required"
        );
        assert_eq!(
            NetworkError::InvalidScale(-1.0).to_string(),
            "invalid metric scale -1"
        );
    }
}
