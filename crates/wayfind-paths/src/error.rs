use std::fmt;

use wayfind_core::NodeId;

/// Errors that stop a route from being planned.
///
/// A missing route is not an error: the search then returns an empty
/// [`Route`](crate::Route) with [`Outcome::Exhausted`](crate::Outcome::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No routable node exists to resolve an endpoint to.
    EmptyNetwork,
    /// A node id outside the network was passed to the search.
    UnknownNode(NodeId),
    /// The search expanded `limit` nodes without reaching the goal.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNetwork => write!(f, "network has no routable node"),
            Self::UnknownNode(id) => write!(f, "node {id} is not part of the network"),
            Self::ExpansionLimit { limit } => {
                write!(f, "search gave up after expanding {limit} nodes")
            }
        }
    }
}

impl std::error::Error for RouteError {}
