//! [`RouteModel`]: a road network plus the slot a planner writes its path into.

use crate::geom::Coord;
use crate::network::RoadNetwork;

/// A road network together with the most recently planned path.
///
/// The path slot is what a renderer reads from; the network itself is never
/// touched by planning.
#[derive(Clone, Debug)]
pub struct RouteModel {
    network: RoadNetwork,
    path: Vec<Coord>,
}

impl RouteModel {
    /// Wrap a network with an empty path slot.
    pub fn new(network: RoadNetwork) -> Self {
        Self {
            network,
            path: Vec::new(),
        }
    }

    /// The underlying network.
    #[inline]
    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    /// The last path stored, start first. Empty if none was found.
    #[inline]
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Replace the stored path.
    pub fn set_path(&mut self, path: Vec<Coord>) {
        self.path = path;
    }

    /// Forget the stored path.
    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    /// Give back the network, dropping the path.
    pub fn into_network(self) -> RoadNetwork {
        self.network
    }
}

impl From<RoadNetwork> for RouteModel {
    fn from(network: RoadNetwork) -> Self {
        Self::new(network)
    }
}
