//! The [`Grid`] type — a dense, owned 2D array of [`Cell`]s mapped onto a
//! rectangle of world space.
//!
//! Cells are addressed either by [`Point`] or by flat row-major index; the
//! index form is what searches store in [`Cell::parent`].

use std::ops::{Index, IndexMut};

use glam::Vec2;
use rand::Rng;
use thiserror::Error;

use crate::cell::{Cell, CostLevel};
use crate::geom::{Point, Range};
use crate::layout::MazeLayout;

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

/// Physical extent of a grid and the size of its cells.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// World-space size of the whole grid.
    pub extent: Vec2,
    /// Half the side length of one cell.
    pub cell_radius: f32,
    /// World-space centre of the grid.
    pub origin: Vec2,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            extent: Vec2::new(50.0, 50.0),
            cell_radius: 0.5,
            origin: Vec2::ZERO,
        }
    }
}

impl GridConfig {
    /// Unit-sized cells covering exactly `width × height` world units.
    pub fn for_size(width: i32, height: i32) -> Self {
        Self {
            extent: Vec2::new(width.max(0) as f32, height.max(0) as f32),
            ..Self::default()
        }
    }

    #[inline]
    pub fn cell_diameter(&self) -> f32 {
        self.cell_radius * 2.0
    }

    /// Number of cells along each axis: `round(extent / diameter)`, ties to
    /// even.
    pub fn size(&self) -> Point {
        let d = self.cell_diameter();
        if d <= 0.0 {
            return Point::ZERO;
        }
        let w = (self.extent.x / d).round_ties_even().max(0.0) as i32;
        let h = (self.extent.y / d).round_ties_even().max(0.0) as i32;
        Point::new(w, h)
    }

    /// World-space corner of cell (0, 0).
    #[inline]
    fn bottom_left(&self) -> Vec2 {
        self.origin - self.extent / 2.0
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors raised by grid construction and editing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The layout does not have the size the configuration asks for.
    #[error("layout is {found}, grid configuration expects {expected}")]
    LayoutMismatch { expected: Point, found: Point },
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Point),
    #[error("cell {0} is not walkable")]
    NotWalkable(Point),
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A dense grid of cells. Every in-range coordinate has exactly one cell.
///
/// A new maze means a new `Grid`; grids are never resized in place.
#[derive(Clone, Debug)]
pub struct Grid {
    config: GridConfig,
    bounds: Range,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a grid from a maze layout.
    ///
    /// Walkability comes from `layout`; every cell starts at
    /// [`CostLevel::Normal`]. Fails if the layout size differs from
    /// `config.size()`.
    pub fn build(layout: &MazeLayout, config: GridConfig) -> Result<Self, GridError> {
        let expected = config.size();
        if layout.size() != expected {
            return Err(GridError::LayoutMismatch {
                expected,
                found: layout.size(),
            });
        }

        Ok(Self::allocate(layout, config))
    }

    /// Build a unit-cell grid sized to `layout`.
    pub fn from_layout(layout: &MazeLayout) -> Self {
        Self::allocate(layout, GridConfig::for_size(layout.width(), layout.height()))
    }

    fn allocate(layout: &MazeLayout, config: GridConfig) -> Self {
        let bounds = layout.bounds();
        let d = config.cell_diameter();
        let r = config.cell_radius;
        let corner = config.bottom_left();
        let cells = bounds
            .iter()
            .map(|p| {
                let world = corner + Vec2::new(p.x as f32 * d + r, p.y as f32 * d + r);
                Cell::new(layout.is_walkable(p), world)
            })
            .collect();
        Self {
            config,
            bounds,
            width: bounds.width() as usize,
            cells,
        }
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at `p`, or `None` if out of range.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Whether `p` is in range and walkable.
    #[inline]
    pub fn walkable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| c.walkable)
    }

    /// World-space centre of the cell at `p`.
    pub fn world_position(&self, p: Point) -> Option<Vec2> {
        self.cell(p).map(|c| c.world)
    }

    /// Iterate over `(Point, &Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter())
    }

    /// In-bounds axis-aligned neighbours of `p`, in [`Point::cardinal`]
    /// order. Walkability is not checked.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.cardinal().into_iter().filter(move |&n| self.contains(n))
    }

    /// Flat-index form of [`neighbors`](Self::neighbors).
    pub fn neighbor_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(self.point(idx)).filter_map(move |n| self.idx(n))
    }

    /// Map a world-space point to the nearest cell.
    ///
    /// Coordinates outside the grid extent clamp to the border, so this
    /// always returns an in-range point for a non-empty grid.
    pub fn cell_at(&self, world: Vec2) -> Point {
        let extent = self.config.extent;
        let local = world - self.config.origin + extent / 2.0;
        let percent = |v: f32, len: f32| {
            if len > 0.0 { (v / len).clamp(0.0, 1.0) } else { 0.0 }
        };
        let px = percent(local.x, extent.x);
        let py = percent(local.y, extent.y);
        let x = ((self.width() - 1).max(0) as f32 * px).round_ties_even() as i32;
        let y = ((self.height() - 1).max(0) as f32 * py).round_ties_even() as i32;
        Point::new(x, y)
    }

    /// Number of cells expanded by the current search.
    pub fn count_visited(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }

    /// The walkable/wall matrix of this grid.
    pub fn layout(&self) -> MazeLayout {
        let mut layout = MazeLayout::new(self.width(), self.height());
        for (p, c) in self.iter() {
            layout.set(p, c.walkable);
        }
        layout
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Clear per-search state on every cell.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset();
        }
    }

    /// Cycle the cost level of the walkable cell at `p` and return the new
    /// level.
    pub fn toggle_cost(&mut self, p: Point) -> Result<CostLevel, GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        let c = &mut self.cells[i];
        if !c.walkable {
            return Err(GridError::NotWalkable(p));
        }
        c.cost_level = c.cost_level.toggled();
        Ok(c.cost_level)
    }

    /// Give every walkable cell a uniformly random cost level.
    pub fn randomize_costs(&mut self, rng: &mut impl Rng) {
        for c in self.cells.iter_mut().filter(|c| c.walkable) {
            c.cost_level = if rng.random_range(0..2u8) == 0 {
                CostLevel::Normal
            } else {
                CostLevel::High
            };
        }
    }
}

impl Index<usize> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }
}

impl IndexMut<usize> for Grid {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn open(w: i32, h: i32) -> Grid {
        Grid::from_layout(&MazeLayout::open(w, h))
    }

    #[test]
    fn config_size_rounds_extent() {
        assert_eq!(GridConfig::default().size(), Point::new(50, 50));
        let c = GridConfig {
            extent: Vec2::new(10.0, 7.0),
            cell_radius: 1.0,
            origin: Vec2::ZERO,
        };
        // 3.5 rounds to even.
        assert_eq!(c.size(), Point::new(5, 4));
    }

    #[test]
    fn build_checks_layout_size() {
        let err = Grid::build(&MazeLayout::open(4, 4), GridConfig::for_size(5, 5)).unwrap_err();
        assert_eq!(
            err,
            GridError::LayoutMismatch {
                expected: Point::new(5, 5),
                found: Point::new(4, 4),
            }
        );
    }

    #[test]
    fn build_places_cells_in_world() {
        let g = Grid::build(&MazeLayout::open(4, 2), GridConfig::for_size(4, 2)).unwrap();
        assert_eq!(g.world_position(Point::new(0, 0)), Some(Vec2::new(-1.5, -0.5)));
        assert_eq!(g.world_position(Point::new(3, 1)), Some(Vec2::new(1.5, 0.5)));
        assert!(g.iter().all(|(_, c)| c.cost_level == CostLevel::Normal));
    }

    #[test]
    fn idx_point_roundtrip() {
        let g = open(7, 3);
        for p in g.bounds() {
            let i = g.idx(p).unwrap();
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.idx(Point::new(7, 0)), None);
        assert_eq!(g.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn neighbors_fixed_order_and_bounds() {
        let g = open(3, 3);
        let n: Vec<_> = g.neighbors(Point::new(1, 1)).collect();
        assert_eq!(
            n,
            vec![
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
        let corner: Vec<_> = g.neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(0, 1), Point::new(1, 0)]);
        let idx: Vec<_> = g.neighbor_indices(0).collect();
        assert_eq!(idx, vec![3, 1]);
    }

    #[test]
    fn cell_at_maps_and_clamps() {
        let g = Grid::build(&MazeLayout::open(50, 50), GridConfig::default()).unwrap();
        assert_eq!(g.cell_at(Vec2::new(-25.0, -25.0)), Point::new(0, 0));
        assert_eq!(g.cell_at(Vec2::new(25.0, 25.0)), Point::new(49, 49));
        assert_eq!(g.cell_at(Vec2::new(-1000.0, 1000.0)), Point::new(0, 49));
        assert_eq!(g.cell_at(Vec2::new(0.0, 0.0)), Point::new(24, 24));
    }

    #[test]
    fn reset_clears_search_state_only() {
        let mut g = open(2, 2);
        g.toggle_cost(Point::new(1, 1)).unwrap();
        g[0].visited = true;
        g[0].on_path = true;
        g[3].parent = Some(0);
        g[3].g_cost = 4.0;
        g.reset();
        assert_eq!(g.count_visited(), 0);
        assert!(g.iter().all(|(_, c)| c.parent.is_none() && !c.on_path && c.g_cost == 0.0));
        assert_eq!(g.cell(Point::new(1, 1)).unwrap().cost_level, CostLevel::High);
    }

    #[test]
    fn toggle_cost_twice_restores() {
        let mut g = open(2, 2);
        let p = Point::new(1, 0);
        assert_eq!(g.toggle_cost(p), Ok(CostLevel::High));
        assert_eq!(g.toggle_cost(p), Ok(CostLevel::Normal));
    }

    #[test]
    fn toggle_cost_rejects_walls_and_out_of_bounds() {
        let mut g = Grid::from_layout(&MazeLayout::from_rows(&[".#"]));
        assert_eq!(
            g.toggle_cost(Point::new(1, 0)),
            Err(GridError::NotWalkable(Point::new(1, 0)))
        );
        assert_eq!(
            g.toggle_cost(Point::new(2, 0)),
            Err(GridError::OutOfBounds(Point::new(2, 0)))
        );
    }

    #[test]
    fn randomize_costs_skips_walls() {
        let layout = MazeLayout::from_rows(&["#.#.", "....", "#..#"]);
        let mut g = Grid::from_layout(&layout);
        let mut rng = StdRng::seed_from_u64(7);
        g.randomize_costs(&mut rng);
        assert!(
            g.iter()
                .filter(|(_, c)| !c.walkable)
                .all(|(_, c)| c.cost_level == CostLevel::Normal)
        );
        assert_eq!(g.layout(), layout);
    }
}
