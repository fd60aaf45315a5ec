use mazewalk_core::Grid;

use crate::frontier::Search;

impl Search {
    /// Breadth-first relaxation: every neighbour joins the queue at most
    /// once and keeps the parent that discovered it. Weights are ignored.
    pub(crate) fn expand_bfs(&mut self, grid: &mut Grid, current: usize, neighbors: &[usize]) {
        for &ni in neighbors {
            if self.queued[ni] {
                continue;
            }
            grid[ni].parent = Some(current);
            self.push(ni);
        }
    }
}

#[cfg(test)]
mod tests {
    use mazewalk_core::{Grid, MazeLayout, Point};

    use crate::{Algorithm, Pathfinder, SearchEvent};

    fn visit_order(pf: &mut Pathfinder) -> Vec<Point> {
        let mut order = Vec::new();
        while let Some(ev) = pf.step().unwrap() {
            if let SearchEvent::CellVisited(p) = ev {
                order.push(p);
            }
        }
        order
    }

    #[test]
    fn expands_in_layers_using_neighbor_order() {
        let mut pf = Pathfinder::new(Grid::from_layout(&MazeLayout::open(3, 3)));
        pf.start(Point::new(1, 1), Point::new(0, 0), Algorithm::Bfs)
            .unwrap();
        let order = visit_order(&mut pf);
        assert_eq!(
            order,
            vec![
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(0, 2),
                Point::new(2, 2),
                Point::new(0, 0),
            ]
        );
        let target = pf.grid().cell(Point::new(0, 0)).unwrap();
        assert_eq!(target.parent, pf.grid().idx(Point::new(1, 0)));
    }

    #[test]
    fn shortest_by_edges_not_weight() {
        let mut grid = Grid::from_layout(&MazeLayout::open(3, 2));
        grid.toggle_cost(Point::new(1, 0)).unwrap();
        let mut pf = Pathfinder::new(grid);
        let r = pf
            .find_path(Point::new(0, 0), Point::new(2, 0), Algorithm::Bfs)
            .unwrap();
        assert_eq!(r.path, vec![Point::new(1, 0), Point::new(2, 0)]);
        assert_eq!(r.total_cost, 5.0);
    }
}
