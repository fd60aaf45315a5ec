//! **mazewalk-core** — the grid model shared by the maze generators and the
//! search engine.
//!
//! This crate provides integer geometry, the weighted [`Cell`], the dense
//! [`Grid`] that owns all cells and maps them onto world space, and the
//! [`MazeLayout`] matrix that generators produce and grids consume.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::{Cell, CostLevel};
pub use geom::{Point, Range};
pub use grid::{Grid, GridConfig, GridError};
pub use layout::MazeLayout;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn layout_round_trip() {
        let layout = MazeLayout::from_rows(&["#.", ".."]);
        let json = serde_json::to_string(&layout).unwrap();
        let back: MazeLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
    }

    #[test]
    fn cell_round_trip() {
        let mut grid = Grid::from_layout(&MazeLayout::open(3, 2));
        grid.toggle_cost(Point::new(2, 1)).unwrap();
        let mut cell = grid.cell(Point::new(2, 1)).unwrap().clone();
        cell.visited = true;
        cell.parent = Some(4);
        cell.g_cost = 5.0;
        cell.h_cost = 1.0;
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
        assert_eq!(back.cost_level, CostLevel::High);
        assert_eq!(back.world, cell.world);
    }

    #[test]
    fn config_round_trip() {
        let config = GridConfig::for_size(12, 8);
        let json = serde_json::to_string(&config).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.size(), Point::new(12, 8));
    }
}
