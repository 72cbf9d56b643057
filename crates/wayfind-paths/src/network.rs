//! Planner traits for the concrete `wayfind-core` network types.

use wayfind_core::{Coord, NodeId, RoadNetwork, RouteModel};

use crate::distance::euclidean;
use crate::traits::{MetricNetwork, Network, PathSink, RouteNetwork};

impl Network for RoadNetwork {
    #[inline]
    fn node_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn pos(&self, node: NodeId) -> Coord {
        self.coord(node).unwrap_or_default()
    }

    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        RoadNetwork::neighbors(self, node, buf);
    }
}

impl MetricNetwork for RoadNetwork {
    #[inline]
    fn distance(&self, from: NodeId, to: NodeId) -> f64 {
        euclidean(Network::pos(self, from), Network::pos(self, to))
    }

    #[inline]
    fn metric_scale(&self) -> f64 {
        RoadNetwork::metric_scale(self)
    }
}

impl RouteNetwork for RoadNetwork {
    fn nearest_node(&self, pos: Coord) -> Option<NodeId> {
        RoadNetwork::nearest_node(self, pos)
    }
}

impl Network for RouteModel {
    #[inline]
    fn node_count(&self) -> usize {
        self.network().node_count()
    }

    #[inline]
    fn pos(&self, node: NodeId) -> Coord {
        Network::pos(self.network(), node)
    }

    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        Network::neighbors(self.network(), node, buf);
    }
}

impl MetricNetwork for RouteModel {
    #[inline]
    fn distance(&self, from: NodeId, to: NodeId) -> f64 {
        MetricNetwork::distance(self.network(), from, to)
    }

    #[inline]
    fn metric_scale(&self) -> f64 {
        MetricNetwork::metric_scale(self.network())
    }
}

impl RouteNetwork for RouteModel {
    fn nearest_node(&self, pos: Coord) -> Option<NodeId> {
        RouteNetwork::nearest_node(self.network(), pos)
    }
}

impl PathSink for RouteModel {
    fn set_path(&mut self, path: Vec<Coord>) {
        RouteModel::set_path(self, path);
    }
}
