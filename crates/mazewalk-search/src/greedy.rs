use mazewalk_core::{Cell, Grid};

use crate::distance::manhattan;
use crate::frontier::Search;

/// Open-list order: lower `h_cost` first.
pub(crate) fn prefers(a: &Cell, b: &Cell) -> bool {
    a.h_cost < b.h_cost
}

impl Search {
    /// Greedy best-first: a neighbour is opened once, with its estimate and
    /// parent fixed at first sight. `g_cost` is never touched.
    pub(crate) fn expand_greedy(&mut self, grid: &mut Grid, current: usize, neighbors: &[usize]) {
        for &ni in neighbors {
            if self.queued[ni] {
                continue;
            }
            let h = manhattan(grid.point(ni), self.target) as f32;
            let n = &mut grid[ni];
            n.h_cost = h;
            n.parent = Some(current);
            self.push(ni);
        }
    }
}
