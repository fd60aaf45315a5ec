//! Shared pieces of the `mazewalk` terminal demo: scene generation, an ASCII
//! view of a grid mid-search, and a one-line summary per search.

use mazewalk_core::{CostLevel, Grid, GridConfig, GridError, Point};
use mazewalk_gen::{MazeConfig, MazeGen};
use mazewalk_search::{Algorithm, Pathfinder, SearchError, SearchEvent, SearchResult};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const WALL: char = '#';
pub const FLOOR: char = '.';
pub const HEAVY: char = '~';
pub const VISITED: char = ':';
pub const PATH: char = '*';
pub const START: char = 'S';
pub const TARGET: char = 'T';

/// Everything needed to build a [`Scene`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub grid: GridConfig,
    pub maze: MazeConfig,
    pub seed: u64,
    /// Give every walkable cell a random cost level after carving.
    pub random_costs: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::for_size(41, 21),
            maze: MazeConfig::default(),
            seed: 42,
            random_costs: false,
        }
    }
}

/// A generated grid with its canonical endpoints.
#[derive(Debug)]
pub struct Scene {
    pub grid: Grid,
    pub start: Point,
    pub target: Point,
}

impl Scene {
    /// Carve a maze sized by `config.grid` and wrap it in a grid. The start
    /// is the bottom-left cell and the target the top-right one.
    pub fn generate(config: &SceneConfig) -> Result<Self, GridError> {
        let size = config.grid.size();
        let mut mazegen = MazeGen::new(StdRng::seed_from_u64(config.seed));
        let layout = mazegen.generate(size.x, size.y, &config.maze);
        let mut grid = Grid::build(&layout, config.grid)?;
        if config.random_costs {
            grid.randomize_costs(&mut mazegen.rng);
        }
        Ok(Self {
            grid,
            start: Point::ZERO,
            target: size.shift(-1, -1),
        })
    }
}

/// Draw the grid top row first.
pub fn render(grid: &Grid, start: Point, target: Point) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height().max(0) as usize);
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let Some(c) = grid.cell(p) else { continue };
            let ch = if p == start {
                START
            } else if p == target {
                TARGET
            } else if !c.walkable {
                WALL
            } else if c.on_path {
                PATH
            } else if c.visited {
                VISITED
            } else if c.cost_level == CostLevel::High {
                HEAVY
            } else {
                FLOOR
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Run one search to its end, handing the grid and every event to
/// `on_event` as they happen.
pub fn solve<F>(
    pf: &mut Pathfinder,
    start: Point,
    target: Point,
    algorithm: Algorithm,
    on_event: F,
) -> Result<SearchResult, SearchError>
where
    F: FnMut(&Grid, &SearchEvent),
{
    pf.start(start, target, algorithm)?;
    pf.run_with(on_event)
}

/// Column headings matching [`summary`].
pub fn summary_header() -> String {
    format!(
        "{:<16} {:>5} {:>6} {:>7} {:>8}",
        "algorithm", "found", "length", "cost", "explored"
    )
}

pub fn summary(result: &SearchResult) -> String {
    format!(
        "{:<16} {:>5} {:>6} {:>7} {:>8}",
        result.algorithm_name(),
        if result.found { "yes" } else { "no" },
        result.path_len(),
        result.total_cost,
        result.nodes_explored
    )
}
