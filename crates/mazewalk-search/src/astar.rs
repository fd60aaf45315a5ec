use mazewalk_core::{Cell, Grid};

use crate::distance::manhattan;
use crate::frontier::Search;

/// Open-list order: lower `f = g + h` first, ties to lower `h`.
pub(crate) fn prefers(a: &Cell, b: &Cell) -> bool {
    let (fa, fb) = (a.f_cost(), b.f_cost());
    fa < fb || (fa == fb && a.h_cost < b.h_cost)
}

impl Search {
    /// A* relaxation: Dijkstra's rule, plus the Manhattan estimate to the
    /// target recorded on each cell that is opened or improved.
    pub(crate) fn expand_astar(&mut self, grid: &mut Grid, current: usize, neighbors: &[usize]) {
        let current_g = grid[current].g_cost;
        for &ni in neighbors {
            let tentative = current_g + grid[ni].weight() as f32;
            let open = self.queued[ni];
            if open && tentative >= grid[ni].g_cost {
                continue;
            }
            let h = manhattan(grid.point(ni), self.target) as f32;
            let n = &mut grid[ni];
            n.g_cost = tentative;
            n.h_cost = h;
            n.parent = Some(current);
            if !open {
                self.push(ni);
            }
        }
    }
}
