//! Road network model: nodes, roads and the queries route planning needs.
//!
//! A [`RoadNetwork`] is immutable once built. Search state never lives here,
//! so a single network can serve any number of searches.

use std::fmt;

use crate::error::NetworkError;
use crate::geom::Coord;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Stable index of a node within its [`RoadNetwork`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// The index into the network's node array.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RoadKind
// ---------------------------------------------------------------------------

/// Classification of a road, following OpenStreetMap `highway=*` values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadKind {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    Residential,
    Service,
    Unclassified,
    Footway,
}

impl RoadKind {
    /// Map an OpenStreetMap `highway` tag value to a road kind.
    ///
    /// Returns `None` for values that do not describe a road.
    pub fn from_highway_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "motorway" | "motorway_link" => Self::Motorway,
            "trunk" | "trunk_link" => Self::Trunk,
            "primary" | "primary_link" => Self::Primary,
            "secondary" | "secondary_link" => Self::Secondary,
            "tertiary" | "tertiary_link" => Self::Tertiary,
            "residential" | "living_street" => Self::Residential,
            "service" => Self::Service,
            "unclassified" => Self::Unclassified,
            "footway" | "bridleway" | "steps" | "path" | "pedestrian" | "cycleway" => {
                Self::Footway
            }
            _ => return None,
        };
        Some(kind)
    }

    /// Whether routes may use roads of this kind.
    #[inline]
    pub fn is_routable(self) -> bool {
        self != Self::Footway
    }
}

// ---------------------------------------------------------------------------
// Road
// ---------------------------------------------------------------------------

/// An ordered way through network nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    pub kind: RoadKind,
    pub nodes: Vec<NodeId>,
}

// ---------------------------------------------------------------------------
// RoadNetwork
// ---------------------------------------------------------------------------

/// An immutable road network in fractional map space.
///
/// Footway roads are kept for completeness but are invisible to routing:
/// they contribute no adjacency and their nodes are never chosen by
/// [`nearest_node`](Self::nearest_node) unless they also lie on a routable
/// road.
#[derive(Clone, Debug)]
pub struct RoadNetwork {
    coords: Vec<Coord>,
    roads: Vec<Road>,
    // node index -> indices of routable roads passing through it
    node_roads: Vec<Vec<usize>>,
    metric_scale: f64,
}

impl RoadNetwork {
    /// Start building a network.
    pub fn builder() -> RoadNetworkBuilder {
        RoadNetworkBuilder::new()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the network has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates of a node, or `None` if the id is out of range.
    #[inline]
    pub fn coord(&self, id: NodeId) -> Option<Coord> {
        self.coords.get(id.0).copied()
    }

    /// All roads, routable or not.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Routable roads passing through `id`.
    pub fn roads_of(&self, id: NodeId) -> impl Iterator<Item = &Road> + '_ {
        self.node_roads
            .get(id.0)
            .into_iter()
            .flatten()
            .map(move |&ri| &self.roads[ri])
    }

    /// Whether `id` lies on at least one routable road.
    #[inline]
    pub fn is_routable(&self, id: NodeId) -> bool {
        self.node_roads.get(id.0).is_some_and(|r| !r.is_empty())
    }

    /// Meters per map unit.
    #[inline]
    pub fn metric_scale(&self) -> f64 {
        self.metric_scale
    }

    /// Euclidean distance between two nodes, in map units.
    ///
    /// Returns `None` if either id is out of range.
    pub fn distance(&self, a: NodeId, b: NodeId) -> Option<f64> {
        Some(self.coord(a)?.distance(self.coord(b)?))
    }

    /// The routable node closest to `target`.
    ///
    /// Returns `None` only when no node lies on a routable road.
    pub fn nearest_node(&self, target: Coord) -> Option<NodeId> {
        self.coords
            .iter()
            .enumerate()
            .filter(|&(i, _)| !self.node_roads[i].is_empty())
            .map(|(i, c)| (i, c.distance_sq(target)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| NodeId(i))
    }

    /// Append the nodes adjacent to `id` along any routable road into `buf`.
    ///
    /// Adjacent means the previous or next node in a road's node list. Each
    /// neighbor is reported once, in road order. The caller clears `buf`
    /// before calling.
    pub fn neighbors(&self, id: NodeId, buf: &mut Vec<NodeId>) {
        for road in self.roads_of(id) {
            for (i, &n) in road.nodes.iter().enumerate() {
                if n != id {
                    continue;
                }
                let prev = i.checked_sub(1).map(|j| road.nodes[j]);
                let next = road.nodes.get(i + 1).copied();
                for adj in [prev, next].into_iter().flatten() {
                    if adj != id && !buf.contains(&adj) {
                        buf.push(adj);
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// RoadNetworkBuilder
// ---------------------------------------------------------------------------

/// Incremental constructor for a [`RoadNetwork`].
#[derive(Clone, Debug)]
pub struct RoadNetworkBuilder {
    coords: Vec<Coord>,
    roads: Vec<Road>,
    metric_scale: f64,
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadNetworkBuilder {
    /// Create an empty builder with a metric scale of 1 meter per unit.
    pub fn new() -> Self {
        Self {
            coords: Vec::new(),
            roads: Vec::new(),
            metric_scale: 1.0,
        }
    }

    /// Add a node and return its id.
    pub fn add_node(&mut self, pos: Coord) -> NodeId {
        self.coords.push(pos);
        NodeId(self.coords.len() - 1)
    }

    /// Add a road through `nodes`, in order. Returns the road index.
    pub fn add_road(&mut self, kind: RoadKind, nodes: &[NodeId]) -> Result<usize, NetworkError> {
        if nodes.len() < 2 {
            return Err(NetworkError::RoadTooShort { len: nodes.len() });
        }
        if let Some(&bad) = nodes.iter().find(|n| n.0 >= self.coords.len()) {
            return Err(NetworkError::UnknownNode(bad));
        }
        self.roads.push(Road {
            kind,
            nodes: nodes.to_vec(),
        });
        Ok(self.roads.len() - 1)
    }

    /// Set the number of meters per map unit.
    pub fn metric_scale(&mut self, scale: f64) -> &mut Self {
        self.metric_scale = scale;
        self
    }

    /// Validate and freeze the network.
    pub fn build(self) -> Result<RoadNetwork, NetworkError> {
        if !self.metric_scale.is_finite() || self.metric_scale <= 0.0 {
            return Err(NetworkError::InvalidScale(self.metric_scale));
        }
        if let Some(i) = self.coords.iter().position(|c| !c.is_finite()) {
            return Err(NetworkError::InvalidCoord(NodeId(i)));
        }

        let mut node_roads = vec![Vec::new(); self.coords.len()];
        for (ri, road) in self.roads.iter().enumerate() {
            if !road.kind.is_routable() {
                continue;
            }
            for n in &road.nodes {
                let entry: &mut Vec<usize> = &mut node_roads[n.0];
                if entry.last() != Some(&ri) {
                    entry.push(ri);
                }
            }
        }

        log::debug!(
            "built road network: {} nodes, {} roads, {} m/unit",
            self.coords.len(),
            self.roads.len(),
            self.metric_scale
        );

        Ok(RoadNetwork {
            coords: self.coords,
            roads: self.roads,
            node_roads,
            metric_scale: self.metric_scale,
        })
    }
}
