use wayfind_core::{Coord, NodeId};

/// Minimal network interface — node count, positions and adjacency.
pub trait Network {
    /// Number of nodes. Valid ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Position of `node` in fractional map space.
    fn pos(&self, node: NodeId) -> Coord;

    /// Append neighbors of `node` into `buf`. The caller clears `buf` before calling.
    /// Must report the same neighbors every time it is called.
    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>);
}

/// Network with measurable edges.
pub trait MetricNetwork: Network {
    /// Symmetric distance between `from` and `to`, in network units. Must be >= 0.
    fn distance(&self, from: NodeId, to: NodeId) -> f64;

    /// Meters per network unit.
    fn metric_scale(&self) -> f64;
}

/// Full routing interface: endpoint resolution and an admissible heuristic.
pub trait RouteNetwork: MetricNetwork {
    /// The node closest to `pos`, or `None` if the network has no routable node.
    fn nearest_node(&self, pos: Coord) -> Option<NodeId>;

    /// Heuristic estimate of the remaining distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    ///
    /// Defaults to the straight-line [`distance`](MetricNetwork::distance).
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        self.distance(from, to)
    }
}

/// Destination for a finished path, typically read by a renderer.
pub trait PathSink {
    /// Replace the stored path with `path`, start first.
    fn set_path(&mut self, path: Vec<Coord>);
}
