//! Plan a route across a synthetic street grid.
//!
//! Run: cargo run --bin route -- 10 10 90 85 --seed 7
//! Set RUST_LOG=debug to watch the search.

use clap::Parser;
use wayfind_core::RouteModel;
use wayfind_demos::street_grid;
use wayfind_paths::{PlannerConfig, RoutePlanner};

/// Shortest route between two points given as percentages of the map.
#[derive(Parser, Debug)]
#[command(name = "route", version)]
struct Args {
    /// Start x, 0-100
    #[arg(default_value_t = 10.0)]
    start_x: f64,
    /// Start y, 0-100
    #[arg(default_value_t = 10.0)]
    start_y: f64,
    /// End x, 0-100
    #[arg(default_value_t = 90.0)]
    end_x: f64,
    /// End y, 0-100
    #[arg(default_value_t = 90.0)]
    end_y: f64,
    /// Seed for the generated street grid
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Streets running north-south
    #[arg(long, default_value_t = 12)]
    cols: usize,
    /// Streets running east-west
    #[arg(long, default_value_t = 9)]
    rows: usize,
    /// Give up after expanding this many nodes
    #[arg(long)]
    max_expansions: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let network = match street_grid(args.cols, args.rows, args.seed) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "street grid {}x{} (seed {}): {} nodes, {} roads",
        args.cols,
        args.rows,
        args.seed,
        network.len(),
        network.roads().len()
    );
    let mut model = RouteModel::new(network);
    let mut planner = RoutePlanner::new(PlannerConfig {
        max_expansions: args.max_expansions,
        ..Default::default()
    });

    let route = match planner.plan_into(
        &mut model,
        (args.start_x, args.start_y),
        (args.end_x, args.end_y),
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if route.is_empty() {
        println!("No route found.");
        std::process::exit(2);
    }

    let scale = model.network().metric_scale();
    for p in &route.nodes {
        println!("{:>6} {}  {:>8.1} m", p.node.to_string(), p.pos, p.g * scale);
    }
    println!(
        "{} nodes, {:.1} m, {} expansions",
        route.len(),
        route.distance,
        planner.last_expansions()
    );
}
