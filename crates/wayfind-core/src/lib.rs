//! **wayfind-core** — road network model for the *wayfind* route planner.
//!
//! This crate provides the types a planner searches over: fractional map
//! coordinates, an immutable road network with nearest-node and adjacency
//! queries, and a model wrapper holding the most recently planned path.

pub mod error;
pub mod geom;
pub mod model;
pub mod network;

pub use error::NetworkError;
pub use geom::{Coord, PERCENT};
pub use model::RouteModel;
pub use network::{NodeId, Road, RoadKind, RoadNetwork, RoadNetworkBuilder};
