use std::collections::BinaryHeap;

use wayfind_core::{Coord, NodeId, PERCENT};

use crate::error::RouteError;
use crate::route::Route;
use crate::traits::{PathSink, RouteNetwork};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunables for a [`RoutePlanner`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Multiplier applied to raw endpoint inputs before nearest-node lookup.
    /// The default turns 0–100 percentages into 0–1 map units.
    pub input_scale: f64,
    /// Give up with [`RouteError::ExpansionLimit`] after expanding this many
    /// nodes. `None` searches until the goal is found or the frontier is empty.
    pub max_expansions: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            input_scale: PERCENT,
            max_expansions: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-run search state
// ---------------------------------------------------------------------------

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Search record for one node, valid only when `generation` matches the
/// planner's current generation.
#[derive(Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for NodeRef {}

/// Snapshot of a node's search state from the last run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeState {
    /// Cost of the best known path from the start.
    pub g: f64,
    /// Straight-line estimate to the goal, computed when first discovered.
    pub h: f64,
    /// Predecessor on the best known path. `None` for the start node.
    pub parent: Option<NodeId>,
    /// Whether the node has been expanded.
    pub closed: bool,
}

impl NodeState {
    /// Priority of the node in the frontier, `g + h`.
    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

// ---------------------------------------------------------------------------
// RoutePlanner
// ---------------------------------------------------------------------------

/// A* route planner over any [`RouteNetwork`].
///
/// `RoutePlanner` owns the search state arena and frontier so that the
/// network itself stays read-only and repeated searches reuse allocations.
/// State from a previous run is invalidated lazily by bumping a generation
/// counter, never by clearing the arena.
pub struct RoutePlanner {
    pub(crate) config: PlannerConfig,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) expansions: usize,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<NodeId>,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl RoutePlanner {
    /// Create a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            generation: 0,
            open: BinaryHeap::new(),
            expansions: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Number of nodes expanded by the last search.
    #[inline]
    pub fn last_expansions(&self) -> usize {
        self.expansions
    }

    /// Search state of `node` from the last run, or `None` if the last run
    /// never discovered it.
    pub fn state(&self, node: NodeId) -> Option<NodeState> {
        if self.generation == 0 {
            return None;
        }
        let n = self.nodes.get(node.index())?;
        if n.generation != self.generation {
            return None;
        }
        Some(NodeState {
            g: n.g,
            h: n.h,
            parent: (n.parent != NO_PARENT).then_some(NodeId(n.parent)),
            closed: !n.open,
        })
    }

    /// Resolve raw endpoint inputs to the nearest network nodes.
    ///
    /// Inputs are multiplied by [`PlannerConfig::input_scale`] first.
    pub fn resolve<N: RouteNetwork>(
        &self,
        net: &N,
        start: (f64, f64),
        end: (f64, f64),
    ) -> Result<(NodeId, NodeId), RouteError> {
        let from = Coord::new(start.0, start.1) * self.config.input_scale;
        let to = Coord::new(end.0, end.1) * self.config.input_scale;
        let start_node = net.nearest_node(from).ok_or(RouteError::EmptyNetwork)?;
        let end_node = net.nearest_node(to).ok_or(RouteError::EmptyNetwork)?;
        log::debug!("resolved {from} -> {start_node}, {to} -> {end_node}");
        Ok((start_node, end_node))
    }

    /// Plan the shortest route between two raw endpoint inputs.
    pub fn plan<N: RouteNetwork>(
        &mut self,
        net: &N,
        start: (f64, f64),
        end: (f64, f64),
    ) -> Result<Route, RouteError> {
        let (start_node, end_node) = self.resolve(net, start, end)?;
        self.search(net, start_node, end_node)
    }

    /// Like [`plan`](Self::plan), and also store the path coordinates in
    /// `model`. A missing route or an error stores an empty path.
    pub fn plan_into<M: RouteNetwork + PathSink>(
        &mut self,
        model: &mut M,
        start: (f64, f64),
        end: (f64, f64),
    ) -> Result<Route, RouteError> {
        match self.plan(&*model, start, end) {
            Ok(route) => {
                model.set_path(route.coords());
                Ok(route)
            }
            Err(e) => {
                model.set_path(Vec::new());
                Err(e)
            }
        }
    }

    /// Invalidate all state from the previous run and make room for
    /// `len` nodes.
    pub(crate) fn begin_run(&mut self, len: usize) {
        if self.nodes.len() < len {
            self.nodes.resize(len, SearchNode::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Counter wrapped; stale stamps could alias the new generation.
            self.nodes.fill(SearchNode::default());
            self.generation = 1;
        }
        self.open.clear();
        self.expansions = 0;
    }
}
