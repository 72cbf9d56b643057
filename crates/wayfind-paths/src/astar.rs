use wayfind_core::NodeId;

use crate::error::RouteError;
use crate::planner::{NO_PARENT, NodeRef, RoutePlanner};
use crate::route::{Outcome, Route};
use crate::traits::RouteNetwork;

impl RoutePlanner {
    /// Compute the shortest route from `start` to `goal` using A*.
    ///
    /// Returns a route with both endpoints included, or an empty route with
    /// [`Outcome::Exhausted`] if the goal is unreachable. Fails only on
    /// unknown node ids or when the configured expansion limit is hit.
    pub fn search<N: RouteNetwork>(
        &mut self,
        net: &N,
        start: NodeId,
        goal: NodeId,
    ) -> Result<Route, RouteError> {
        let len = net.node_count();
        for id in [start, goal] {
            if id.index() >= len {
                return Err(RouteError::UnknownNode(id));
            }
        }

        self.begin_run(len);
        let cur_gen = self.generation;
        log::debug!("astar: searching {start} -> {goal} over {len} nodes");

        // Initialise the start node.
        let h = net.estimate(start, goal);
        {
            let node = &mut self.nodes[start.index()];
            node.g = 0.0;
            node.h = h;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
        }
        self.open.push(NodeRef {
            idx: start.index(),
            f: h,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = loop {
            let Some(current) = self.next_node() else {
                break Ok(Outcome::Exhausted);
            };
            if current == goal {
                break Ok(Outcome::Found);
            }
            if let Some(limit) = self.config.max_expansions {
                if self.expansions >= limit {
                    break Err(RouteError::ExpansionLimit { limit });
                }
            }

            self.nodes[current.index()].open = false;
            self.expansions += 1;
            log::trace!(
                "astar: expanding {current} g={:.6} h={:.6}",
                self.nodes[current.index()].g,
                self.nodes[current.index()].h
            );
            self.add_neighbors(net, current, goal, len, &mut nbuf);
        };

        self.nbuf = nbuf;

        let route = match outcome? {
            Outcome::Found => self.construct_final_path(net, start, goal),
            Outcome::Exhausted => Route::exhausted(),
        };
        log::debug!(
            "astar: {:?} after {} expansions, {} nodes, {:.1} m",
            route.outcome,
            self.expansions,
            route.len(),
            route.distance
        );
        Ok(route)
    }

    /// Discover the neighbors of `current` and relax each one.
    ///
    /// A neighbor's record is (re)written and pushed onto the frontier only
    /// when the new `g` strictly improves on what this run already recorded.
    /// The heuristic is computed once, when a node is first discovered.
    /// Neighbor ids at or beyond `len` are ignored, even when the arena is
    /// larger from an earlier run on a bigger network.
    fn add_neighbors<N: RouteNetwork>(
        &mut self,
        net: &N,
        current: NodeId,
        goal: NodeId,
        len: usize,
        nbuf: &mut Vec<NodeId>,
    ) {
        let cur_gen = self.generation;
        let current_g = self.nodes[current.index()].g;

        nbuf.clear();
        net.neighbors(current, nbuf);

        for &nb in nbuf.iter() {
            if nb.index() >= len {
                continue;
            }
            let n = &mut self.nodes[nb.index()];
            let tentative_g = current_g + net.distance(current, nb);

            if n.generation == cur_gen {
                // Already discovered this run.
                if tentative_g >= n.g {
                    continue;
                }
            } else {
                n.generation = cur_gen;
                n.h = net.estimate(nb, goal);
            }

            n.g = tentative_g;
            n.parent = current.index();
            n.open = true;

            self.open.push(NodeRef {
                idx: nb.index(),
                f: tentative_g + n.h,
            });
        }
    }

    /// Remove and return the frontier node with the smallest `f = g + h`.
    ///
    /// Heap entries superseded by a later relaxation, or belonging to an
    /// already expanded node, are discarded on the way.
    fn next_node(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.open.pop() {
            let n = &self.nodes[entry.idx];
            if n.generation != self.generation || !n.open {
                continue;
            }
            if entry.f > n.g + n.h {
                // Stale: a cheaper entry for this node is still queued.
                continue;
            }
            return Some(NodeId(entry.idx));
        }
        None
    }
}
