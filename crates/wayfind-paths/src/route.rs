use wayfind_core::{Coord, NodeId};

use crate::RoutePlanner;
use crate::planner::NO_PARENT;
use crate::traits::RouteNetwork;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was reached.
    Found,
    /// The frontier ran dry before reaching the goal; no route exists.
    Exhausted,
}

/// One node of a planned route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub node: NodeId,
    pub pos: Coord,
    /// Accumulated cost from the start, in network units.
    pub g: f64,
}

/// A planned route, start first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub nodes: Vec<PathNode>,
    /// Length in meters.
    pub distance: f64,
    /// Length in network units, before the metric scale is applied.
    pub raw_distance: f64,
    pub outcome: Outcome,
}

impl Route {
    /// The empty result of a search that found no route.
    pub fn exhausted() -> Self {
        Self {
            nodes: Vec::new(),
            distance: 0.0,
            raw_distance: 0.0,
            outcome: Outcome::Exhausted,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// First node, if any.
    pub fn start(&self) -> Option<&PathNode> {
        self.nodes.first()
    }

    /// Last node, if any.
    pub fn goal(&self) -> Option<&PathNode> {
        self.nodes.last()
    }

    /// Node positions in route order.
    pub fn coords(&self) -> Vec<Coord> {
        self.nodes.iter().map(|p| p.pos).collect()
    }
}

impl RoutePlanner {
    /// Walk parent links from `goal` back to `start` and build the route.
    ///
    /// Edge distances are summed along the way and scaled to meters. The
    /// walk stops on reaching the start node by identity, so distinct nodes
    /// sharing coordinates cannot cut it short.
    pub(crate) fn construct_final_path<N: RouteNetwork>(
        &self,
        net: &N,
        start: NodeId,
        goal: NodeId,
    ) -> Route {
        let mut nodes = Vec::new();
        let mut raw_distance = 0.0;
        let mut ci = goal.index();

        while ci != start.index() {
            let rec = &self.nodes[ci];
            if rec.parent == NO_PARENT {
                log::warn!("parent chain of {goal} broke at #{ci}");
                break;
            }
            let node = NodeId(ci);
            let parent = NodeId(rec.parent);
            raw_distance += net.distance(parent, node);
            nodes.push(PathNode {
                node,
                pos: net.pos(node),
                g: rec.g,
            });
            ci = rec.parent;
        }

        nodes.push(PathNode {
            node: start,
            pos: net.pos(start),
            g: 0.0,
        });
        nodes.reverse();

        Route {
            nodes,
            distance: raw_distance * net.metric_scale(),
            raw_distance,
            outcome: Outcome::Found,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let route = Route {
            nodes: vec![
                PathNode {
                    node: NodeId(3),
                    pos: Coord::new(0.1, 0.2),
                    g: 0.0,
                },
                PathNode {
                    node: NodeId(9),
                    pos: Coord::new(0.1, 0.5),
                    g: 0.3,
                },
            ],
            distance: 30.0,
            raw_distance: 0.3,
            outcome: Outcome::Found,
        };
        let json = serde_json::to_string(&route).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, back);
    }
}
