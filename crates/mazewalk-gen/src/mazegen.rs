//! Maze layout generators.
//!
//! Provides two strategies:
//! - **Recursive backtracker**: carves a perfect maze on the odd-coordinate
//!   lattice, then braids it by opening some walls to add loops.
//! - **Random density**: every cell is independently a wall with a fixed
//!   probability. No connectivity guarantee.
//!
//! Both force the canonical endpoints `(0, 0)` and `(width-1, height-1)`
//! walkable.

use log::debug;
use mazewalk_core::{MazeLayout, Point, Range};
use rand::Rng;

/// Carving steps in direction order up, right, down, left (two cells at a
/// time, leaving a wall cell in between).
const CARVE_STEPS: [Point; 4] = [
    Point::new(0, -2),
    Point::new(2, 0),
    Point::new(0, 2),
    Point::new(-2, 0),
];

/// Which generator [`MazeGen::generate`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeStrategy {
    #[default]
    Backtracker,
    RandomDensity,
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub strategy: MazeStrategy,
    /// Probability that the braiding pass opens an eligible wall.
    pub braid_chance: f64,
    /// Probability that a random-density cell is a wall.
    pub wall_density: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            strategy: MazeStrategy::Backtracker,
            braid_chance: 0.3,
            wall_density: 0.3,
        }
    }
}

/// One pending cell of the depth-first carve.
struct Frame {
    cell: Point,
    steps: [Point; 4],
    next: usize,
}

/// Maze generator driven by a caller-supplied random source.
///
/// Seed the source (for example `StdRng::seed_from_u64`) to get
/// reproducible layouts.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `width × height` layout with the strategy from `config`.
    pub fn generate(&mut self, width: i32, height: i32, config: &MazeConfig) -> MazeLayout {
        match config.strategy {
            MazeStrategy::Backtracker => self.backtracker(width, height, config.braid_chance),
            MazeStrategy::RandomDensity => self.random_density(width, height, config.wall_density),
        }
    }

    /// Carve a maze with the recursive backtracker, then braid it.
    ///
    /// 1. Pick a random start on the interior odd lattice.
    /// 2. Depth-first carve: from each cell, try the four directions in a
    ///    freshly shuffled order and carve into any interior lattice cell two
    ///    steps away that is still a wall, opening the wall in between.
    /// 3. Braid: visit every cell column by column; a wall with at least two
    ///    walkable neighbours opens with probability `braid_chance`. Cells
    ///    opened earlier in the sweep count as walkable for later ones.
    /// 4. Force both corners walkable and link them to the maze if needed.
    ///    Grids too narrow or short to hold a lattice cell get a single
    ///    corridor joining the two corners instead.
    ///
    /// Every walkable cell of the result is reachable from `(0, 0)`.
    pub fn backtracker(&mut self, width: i32, height: i32, braid_chance: f64) -> MazeLayout {
        let mut layout = MazeLayout::new(width, height);

        let start = self.lattice_start(layout.bounds());
        if let Some(start) = start {
            self.carve(&mut layout, start);
        }
        let carved = layout.count_walkable();

        self.braid(&mut layout, braid_chance);
        let braided = layout.count_walkable() - carved;

        force_corners(&mut layout);
        if start.is_some() {
            link_corners(&mut layout);
        } else if width > 0 && height > 0 {
            corridor(&mut layout, Point::ZERO, Point::new(width - 1, height - 1));
        }

        debug!(
            "backtracker maze {}x{}: {} carved, {} braided, {} walkable",
            width,
            height,
            carved,
            braided,
            layout.count_walkable()
        );
        layout
    }

    /// Make every cell walkable with probability `1 - wall_density`.
    pub fn random_density(&mut self, width: i32, height: i32, wall_density: f64) -> MazeLayout {
        let mut layout = MazeLayout::new(width, height);
        for x in 0..layout.width() {
            for y in 0..layout.height() {
                let r: f64 = self.rng.random();
                layout.set(Point::new(x, y), r > wall_density);
            }
        }
        force_corners(&mut layout);

        debug!(
            "random maze {}x{} (density {}): {} walkable",
            width,
            height,
            wall_density,
            layout.count_walkable()
        );
        layout
    }

    /// A random odd-parity cell strictly inside `bounds`, or `None` when the
    /// grid is too small to have one.
    fn lattice_start(&mut self, bounds: Range) -> Option<Point> {
        let (w, h) = (bounds.width(), bounds.height());
        if w < 3 || h < 3 {
            return None;
        }
        let x = self.rng.random_range(0..w);
        let y = self.rng.random_range(0..h);
        Some(Point::new(odd_interior(x, w), odd_interior(y, h)))
    }

    /// The four carving steps in Fisher–Yates shuffled order.
    fn shuffled_steps(&mut self) -> [Point; 4] {
        let mut steps = CARVE_STEPS;
        for i in 0..steps.len() {
            let j = self.rng.random_range(i..steps.len());
            steps.swap(i, j);
        }
        steps
    }

    /// Depth-first carve from `start` using an explicit stack.
    fn carve(&mut self, layout: &mut MazeLayout, start: Point) {
        let bounds = layout.bounds();
        layout.set(start, true);
        let mut stack = vec![Frame {
            cell: start,
            steps: self.shuffled_steps(),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&step) = frame.steps.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            let cur = frame.cell;

            let n = cur + step;
            if !bounds.contains_interior(n) || layout.is_walkable(n) {
                continue;
            }
            layout.set(cur.shift(step.x / 2, step.y / 2), true);
            layout.set(n, true);
            stack.push(Frame {
                cell: n,
                steps: self.shuffled_steps(),
                next: 0,
            });
        }
    }

    /// Open walls between walkable cells to add loops.
    fn braid(&mut self, layout: &mut MazeLayout, chance: f64) {
        for x in 0..layout.width() {
            for y in 0..layout.height() {
                let p = Point::new(x, y);
                if layout.is_walkable(p) || layout.walkable_neighbors(p) < 2 {
                    continue;
                }
                let r: f64 = self.rng.random();
                if r < chance {
                    layout.set(p, true);
                }
            }
        }
    }
}

/// Force `v` to odd parity, stepping back by two if that leaves the
/// interior of `0..len`.
fn odd_interior(v: i32, len: i32) -> i32 {
    let v = v | 1;
    if v >= len - 1 { v - 2 } else { v }
}

fn force_corners(layout: &mut MazeLayout) {
    if layout.width() == 0 || layout.height() == 0 {
        return;
    }
    layout.set(Point::ZERO, true);
    layout.set(Point::new(layout.width() - 1, layout.height() - 1), true);
}

/// Carve a straight corridor from each isolated corner to the nearest
/// interior lattice cell.
fn link_corners(layout: &mut MazeLayout) {
    let (w, h) = (layout.width(), layout.height());
    let links = [
        (Point::ZERO, Point::new(1, 1)),
        (
            Point::new(w - 1, h - 1),
            Point::new(odd_interior(w - 1, w), odd_interior(h - 1, h)),
        ),
    ];
    for (corner, target) in links {
        if layout.walkable_neighbors(corner) == 0 {
            corridor(layout, corner, target);
        }
    }
}

/// Open a straight path from `from` to `to`, x first, then y.
fn corridor(layout: &mut MazeLayout, from: Point, to: Point) {
    let mut p = from;
    layout.set(p, true);
    while p.x != to.x {
        p.x += (to.x - p.x).signum();
        layout.set(p, true);
    }
    while p.y != to.y {
        p.y += (to.y - p.y).signum();
        layout.set(p, true);
    }
}
