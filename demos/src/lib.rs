//! Synthetic street networks used by the wayfind demos.
//!
//! Demonstrates: network building, footway exclusion, and A* planning
//! between percentage coordinates.

use rand::{RngExt, SeedableRng};
use wayfind_core::{Coord, NetworkError, NodeId, RoadKind, RoadNetwork};

/// Side length of the demo map in meters.
pub const EXTENT_METERS: f64 = 2000.0;

/// Build a jittered `cols` x `rows` street grid.
///
/// Every east-west street is complete and the middle one is a primary
/// avenue. North-south streets have roughly one block in five closed. A
/// footway runs diagonally across the whole grid and is never routable.
pub fn street_grid(cols: usize, rows: usize, seed: u64) -> Result<RoadNetwork, NetworkError> {
    let cols = cols.max(2);
    let rows = rows.max(2);
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut b = RoadNetwork::builder();

    let step_x = 1.0 / (cols as f64 + 1.0);
    let step_y = 1.0 / (rows as f64 + 1.0);
    let mut grid: Vec<Vec<NodeId>> = Vec::with_capacity(rows);
    for r in 0..rows {
        let mut row = Vec::with_capacity(cols);
        for c in 0..cols {
            let jx: f64 = rng.random();
            let jy: f64 = rng.random();
            let x = (c as f64 + 1.0 + (jx - 0.5) * 0.3) * step_x;
            let y = (r as f64 + 1.0 + (jy - 0.5) * 0.3) * step_y;
            row.push(b.add_node(Coord::new(x, y)));
        }
        grid.push(row);
    }

    // East-west streets.
    for (r, row) in grid.iter().enumerate() {
        let kind = if r == rows / 2 {
            RoadKind::Primary
        } else {
            RoadKind::Residential
        };
        b.add_road(kind, row)?;
    }

    // North-south streets, split wherever a block is closed.
    for c in 0..cols {
        let mut run = vec![grid[0][c]];
        for row in &grid[1..] {
            if rng.random_range(0..5) == 0 {
                if run.len() >= 2 {
                    b.add_road(RoadKind::Residential, &run)?;
                }
                run.clear();
            }
            run.push(row[c]);
        }
        if run.len() >= 2 {
            b.add_road(RoadKind::Residential, &run)?;
        }
    }

    b.add_road(RoadKind::Footway, &[grid[0][0], grid[rows - 1][cols - 1]])?;
    b.metric_scale(EXTENT_METERS);
    b.build()
}
