//! Terminal maze demo.
//!
//! Run: cargo run --bin mazewalk -- --all --random-costs
//!      cargo run --bin mazewalk -- -a dijkstra --delay-ms 15

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use glam::Vec2;
use mazewalk_core::GridConfig;
use mazewalk_demos::{Scene, SceneConfig, render, solve, summary, summary_header};
use mazewalk_gen::{MazeConfig, MazeStrategy};
use mazewalk_search::{Algorithm, Pathfinder};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Recursive backtracker with braiding
    Backtracker,
    /// Independent random walls
    Random,
}

impl From<Strategy> for MazeStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Backtracker => MazeStrategy::Backtracker,
            Strategy::Random => MazeStrategy::RandomDensity,
        }
    }
}

#[derive(Parser)]
#[command(name = "mazewalk", about = "Generate a maze and watch grid searches solve it")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// RNG seed for the maze and cost levels
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// World-space width of the grid
    #[arg(long, default_value = "41")]
    width: f32,

    /// World-space height of the grid
    #[arg(long, default_value = "21")]
    height: f32,

    /// Half the side length of one cell
    #[arg(long, default_value = "0.5")]
    radius: f32,

    #[arg(long, value_enum, default_value = "backtracker")]
    strategy: Strategy,

    /// Chance that braiding opens an eligible wall
    #[arg(long, default_value = "0.3")]
    braid: f64,

    /// Wall probability for the random strategy
    #[arg(long, default_value = "0.3")]
    density: f64,

    /// Search algorithm (bfs, dfs, astar, greedy, dijkstra)
    #[arg(short, long, default_value = "astar")]
    algorithm: Algorithm,

    /// Run every algorithm on the same maze and compare
    #[arg(long)]
    all: bool,

    /// Give walkable cells random cost levels
    #[arg(long)]
    random_costs: bool,

    /// Redraw after every step, pausing this long
    #[arg(long, default_value = "0")]
    delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = SceneConfig {
        grid: GridConfig {
            extent: Vec2::new(cli.width, cli.height),
            cell_radius: cli.radius,
            ..GridConfig::default()
        },
        maze: MazeConfig {
            strategy: cli.strategy.into(),
            braid_chance: cli.braid,
            wall_density: cli.density,
        },
        seed: cli.seed,
        random_costs: cli.random_costs,
    };
    let Scene {
        grid,
        start,
        target,
    } = Scene::generate(&config)?;
    log::info!(
        "{}x{} grid, start {} at {}, target {} at {}",
        grid.width(),
        grid.height(),
        start,
        grid.world_position(start).unwrap_or_default(),
        target,
        grid.world_position(target).unwrap_or_default()
    );

    let algorithms: Vec<Algorithm> = if cli.all {
        Algorithm::ALL.to_vec()
    } else {
        vec![cli.algorithm]
    };

    let delay = Duration::from_millis(cli.delay_ms);
    let mut pf = Pathfinder::new(grid);
    let mut results = Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        let mut draw_error: Option<io::Error> = None;
        let result = solve(&mut pf, start, target, algorithm, |grid, ev| {
            if delay.is_zero() || ev.is_terminal() || draw_error.is_some() {
                return;
            }
            // Redraw in place.
            let mut out = io::stdout().lock();
            let drawn = write!(out, "\x1b[H\x1b[2J{algorithm}\n{}", render(grid, start, target))
                .and_then(|()| out.flush());
            match drawn {
                Ok(()) => thread::sleep(delay),
                Err(e) => draw_error = Some(e),
            }
        })?;
        if let Some(e) = draw_error {
            return Err(anyhow::Error::new(e).context("failed to draw search progress"));
        }
        println!("{algorithm}");
        print!("{}", render(pf.grid(), start, target));
        println!();
        results.push(result);
    }

    println!("{}", summary_header());
    for r in &results {
        println!("{}", summary(r));
    }
    Ok(())
}
