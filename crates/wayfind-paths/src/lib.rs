//! A* route planning over road networks.
//!
//! Given two points in a map's percentage coordinate space, this crate
//! resolves each to its nearest network node and searches for the shortest
//! route between them:
//!
//! - **Endpoint resolution** ([`RoutePlanner::resolve`])
//! - **A\*** shortest-route search ([`RoutePlanner::search`])
//! - **One-shot planning** that also stores the path for rendering
//!   ([`RoutePlanner::plan`], [`RoutePlanner::plan_into`])
//!
//! All searches run through [`RoutePlanner`], which keeps per-run search
//! state in its own arena. Networks are never mutated, so one network can be
//! shared by many planners.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Network`] | node count, positions, adjacency |
//! | [`MetricNetwork`] : [`Network`] | edge distance, metric scale |
//! | [`RouteNetwork`] : [`MetricNetwork`] | nearest node, heuristic |
//! | [`PathSink`] | slot for the finished path |
//!
//! [`wayfind_core::RoadNetwork`] and [`wayfind_core::RouteModel`] implement
//! all of them.

mod astar;
mod distance;
mod error;
mod network;
mod planner;
mod route;
mod traits;

pub use distance::{euclidean, polyline_length};
pub use error::RouteError;
pub use planner::{NodeState, PlannerConfig, RoutePlanner};
pub use route::{Outcome, PathNode, Route};
pub use traits::{MetricNetwork, Network, PathSink, RouteNetwork};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngExt, SeedableRng};
    use wayfind_core::{Coord, NodeId, RoadKind, RoadNetwork, RouteModel};

    /// Exhaustive Dijkstra over the same adjacency, used as an oracle.
    fn oracle<N: MetricNetwork>(net: &N, start: NodeId, goal: NodeId) -> Option<f64> {
        let n = net.node_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut done = vec![false; n];
        let mut buf = Vec::new();
        dist[start.index()] = 0.0;
        loop {
            let next = (0..n)
                .filter(|&i| !done[i] && dist[i].is_finite())
                .min_by(|&a, &b| dist[a].total_cmp(&dist[b]));
            let Some(u) = next else { break };
            done[u] = true;
            buf.clear();
            net.neighbors(NodeId(u), &mut buf);
            for &v in &buf {
                let d = dist[u] + net.distance(NodeId(u), v);
                if d < dist[v.index()] {
                    dist[v.index()] = d;
                }
            }
        }
        dist[goal.index()].is_finite().then(|| dist[goal.index()])
    }

    /// Random points joined by random short roads; usually several components.
    fn random_network(seed: u64, nodes: usize, roads: usize) -> RoadNetwork {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut b = RoadNetwork::builder();
        let ids: Vec<NodeId> = (0..nodes)
            .map(|_| b.add_node(Coord::new(rng.random(), rng.random())))
            .collect();
        for _ in 0..roads {
            let len = rng.random_range(2..5);
            let way: Vec<NodeId> = (0..len)
                .map(|_| ids[rng.random_range(0..nodes)])
                .collect();
            let kind = if rng.random_range(0..10) == 0 {
                RoadKind::Footway
            } else {
                RoadKind::Residential
            };
            b.add_road(kind, &way).unwrap();
        }
        b.metric_scale(1500.0);
        b.build().unwrap()
    }

    #[test]
    fn matches_dijkstra_on_random_networks() {
        let mut planner = RoutePlanner::default();
        let mut found = 0;
        let mut exhausted = 0;
        for seed in 0..20 {
            let net = random_network(seed, 60, 45);
            for (s, t) in [(0, 59), (3, 17), (10, 40), (22, 22)] {
                let (s, t) = (NodeId(s), NodeId(t));
                let route = planner.search(&net, s, t).unwrap();
                match oracle(&net, s, t) {
                    Some(best) => {
                        found += 1;
                        assert_eq!(route.outcome, Outcome::Found);
                        assert!(
                            (route.raw_distance - best).abs() < 1e-9,
                            "seed {seed}: {} vs {best}",
                            route.raw_distance
                        );
                        assert!((route.distance - best * 1500.0).abs() < 1e-6);
                        assert_eq!(route.start().unwrap().node, s);
                        assert_eq!(route.goal().unwrap().node, t);
                    }
                    None => {
                        exhausted += 1;
                        assert_eq!(route.outcome, Outcome::Exhausted);
                        assert!(route.is_empty());
                        assert_eq!(route.distance, 0.0);
                    }
                }
            }
        }
        assert!(found > 0 && exhausted > 0);
    }

    #[test]
    fn heuristic_never_overestimates_on_random_networks() {
        let mut planner = RoutePlanner::default();
        for seed in 100..110 {
            let net = random_network(seed, 40, 40);
            let (s, t) = (NodeId(0), NodeId(39));
            planner.search(&net, s, t).unwrap();
            for i in 0..net.len() {
                let node = NodeId(i);
                let (Some(state), Some(rest)) = (planner.state(node), oracle(&net, node, t))
                else {
                    continue;
                };
                assert!(state.h <= rest + 1e-9, "seed {seed}: h({node}) > {rest}");
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let net = random_network(7, 80, 90);
        let mut first_planner = RoutePlanner::default();
        let first = first_planner.search(&net, NodeId(1), NodeId(70)).unwrap();
        for _ in 0..5 {
            let mut planner = RoutePlanner::default();
            assert_eq!(planner.search(&net, NodeId(1), NodeId(70)).unwrap(), first);
            assert_eq!(first_planner.search(&net, NodeId(1), NodeId(70)).unwrap(), first);
        }
    }

    // A small town in percentage terms: a main street along y = 50% with a
    // side street to the north and a footway shortcut that must be ignored.
    fn town() -> RouteModel {
        let mut b = RoadNetwork::builder();
        let w = b.add_node(Coord::new(0.1, 0.5));
        let c = b.add_node(Coord::new(0.5, 0.5));
        let e = b.add_node(Coord::new(0.9, 0.5));
        let n = b.add_node(Coord::new(0.5, 0.1));
        let ne = b.add_node(Coord::new(0.9, 0.1));
        b.add_road(RoadKind::Primary, &[w, c, e]).unwrap();
        b.add_road(RoadKind::Residential, &[c, n, ne]).unwrap();
        b.add_road(RoadKind::Footway, &[w, ne]).unwrap();
        b.metric_scale(2000.0);
        RouteModel::new(b.build().unwrap())
    }

    #[test]
    fn resolve_normalises_percent_inputs() {
        let model = town();
        let planner = RoutePlanner::default();
        let (s, t) = planner.resolve(&model, (12.0, 48.0), (88.0, 12.0)).unwrap();
        assert_eq!(s, NodeId(0));
        assert_eq!(t, NodeId(4));
    }

    #[test]
    fn input_scale_is_configurable() {
        let model = town();
        let planner = RoutePlanner::new(PlannerConfig {
            input_scale: 1.0,
            ..Default::default()
        });
        let (s, t) = planner.resolve(&model, (0.12, 0.48), (0.88, 0.12)).unwrap();
        assert_eq!((s, t), (NodeId(0), NodeId(4)));
    }

    #[test]
    fn plan_into_fills_path_slot() {
        let mut model = town();
        let mut planner = RoutePlanner::default();
        let route = planner.plan_into(&mut model, (10.0, 50.0), (90.0, 10.0)).unwrap();

        let ids: Vec<usize> = route.nodes.iter().map(|p| p.node.index()).collect();
        // The footway w-ne is shorter but not routable.
        assert_eq!(ids, vec![0, 1, 3, 4]);
        assert!((route.raw_distance - 1.2).abs() < 1e-12);
        assert!((route.distance - 2400.0).abs() < 1e-9);
        assert_eq!(model.path(), route.coords().as_slice());
    }

    #[test]
    fn plan_into_clears_path_when_unreachable() {
        let mut b = RoadNetwork::builder();
        let a = b.add_node(Coord::new(0.1, 0.1));
        let bb = b.add_node(Coord::new(0.2, 0.1));
        let c = b.add_node(Coord::new(0.8, 0.9));
        let d = b.add_node(Coord::new(0.9, 0.9));
        b.add_road(RoadKind::Residential, &[a, bb]).unwrap();
        b.add_road(RoadKind::Residential, &[c, d]).unwrap();
        let mut model = RouteModel::new(b.build().unwrap());
        model.set_path(vec![Coord::new(0.5, 0.5)]);

        let mut planner = RoutePlanner::default();
        let route = planner.plan_into(&mut model, (10.0, 10.0), (90.0, 90.0)).unwrap();
        assert_eq!(route.outcome, Outcome::Exhausted);
        assert!(model.path().is_empty());
    }

    #[test]
    fn plan_into_clears_path_on_error() {
        let mut model = town();
        let mut planner = RoutePlanner::default();
        planner.plan_into(&mut model, (10.0, 50.0), (50.0, 50.0)).unwrap();
        assert_eq!(model.path().len(), 2);

        let mut capped = RoutePlanner::new(PlannerConfig {
            max_expansions: Some(1),
            ..Default::default()
        });
        assert_eq!(
            capped.plan_into(&mut model, (10.0, 50.0), (90.0, 50.0)).unwrap_err(),
            RouteError::ExpansionLimit { limit: 1 }
        );
        assert!(model.path().is_empty());
    }

    #[test]
    fn same_nearest_node_gives_single_node_route() {
        let model = town();
        let mut planner = RoutePlanner::default();
        let route = planner.plan(&model, (49.0, 51.0), (51.0, 49.0)).unwrap();
        assert_eq!(route.len(), 1);
        assert_eq!(route.start().unwrap().node, NodeId(1));
        assert_eq!(route.distance, 0.0);
    }

    #[test]
    fn empty_network_is_an_error() {
        let net = RoadNetwork::builder().build().unwrap();
        let mut planner = RoutePlanner::default();
        assert_eq!(
            planner.plan(&net, (10.0, 10.0), (20.0, 20.0)).unwrap_err(),
            RouteError::EmptyNetwork
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(RouteError::EmptyNetwork.to_string(), "network has no routable node");
        assert_eq!(
            RouteError::UnknownNode(NodeId(5)).to_string(),
            "node #5 is not part of the network"
        );
        assert_eq!(
            RouteError::ExpansionLimit { limit: 9 }.to_string(),
            "search gave up after expanding 9 nodes"
        );
    }
}
