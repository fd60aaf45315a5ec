use mazewalk_core::{Cell, Grid};

use crate::frontier::Search;

/// Open-list order: lower `g_cost` first.
pub(crate) fn prefers(a: &Cell, b: &Cell) -> bool {
    a.g_cost < b.g_cost
}

impl Search {
    /// Dijkstra relaxation: a neighbour takes the route through `current`
    /// when it is not yet open or the route is strictly cheaper. Stepping
    /// into a cell costs that cell's weight.
    pub(crate) fn expand_dijkstra(&mut self, grid: &mut Grid, current: usize, neighbors: &[usize]) {
        let current_g = grid[current].g_cost;
        for &ni in neighbors {
            let tentative = current_g + grid[ni].weight() as f32;
            let open = self.queued[ni];
            let n = &mut grid[ni];
            if open && tentative >= n.g_cost {
                continue;
            }
            n.g_cost = tentative;
            n.parent = Some(current);
            if !open {
                self.push(ni);
            }
        }
    }
}
