use mazewalk_core::Grid;

use crate::frontier::Search;

impl Search {
    /// Depth-first relaxation: every unvisited neighbour is pushed, even if
    /// it is already on the stack, and takes `current` as its parent. The
    /// most recent push is the copy popped first, so the parent always
    /// matches the expansion that reaches it.
    pub(crate) fn expand_dfs(&mut self, grid: &mut Grid, current: usize, neighbors: &[usize]) {
        for &ni in neighbors {
            grid[ni].parent = Some(current);
            self.push(ni);
        }
    }
}

#[cfg(test)]
mod tests {
    use mazewalk_core::{Grid, MazeLayout, Point};

    use crate::{Algorithm, Pathfinder, SearchEvent};

    #[test]
    fn explores_last_pushed_neighbor_first() {
        let mut pf = Pathfinder::new(Grid::from_layout(&MazeLayout::open(3, 3)));
        pf.start(Point::new(1, 1), Point::new(0, 0), Algorithm::Dfs)
            .unwrap();
        assert_eq!(
            pf.step().unwrap(),
            Some(SearchEvent::CellVisited(Point::new(1, 1)))
        );
        // Pushed up, down, left, right: right comes off the stack first.
        assert_eq!(
            pf.step().unwrap(),
            Some(SearchEvent::CellVisited(Point::new(2, 1)))
        );
    }

    #[test]
    fn snakes_through_open_grid() {
        let mut pf = Pathfinder::new(Grid::from_layout(&MazeLayout::open(3, 3)));
        let r = pf
            .find_path(Point::new(0, 0), Point::new(2, 2), Algorithm::Dfs)
            .unwrap();
        assert_eq!(
            r.path,
            vec![
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(1, 1),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
        assert_eq!(r.nodes_explored, 9);
        assert_eq!(r.total_cost, 8.0);
    }
}
