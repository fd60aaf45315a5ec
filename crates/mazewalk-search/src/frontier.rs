//! Per-search state shared by all five algorithms: the frontier, frontier
//! membership and the expansion loop.
//!
//! The closed set is the grid's own `visited` flag. Open-list algorithms
//! select by linear scan and remove in place, so among equally good
//! candidates the one inserted first wins.

use std::collections::VecDeque;

use mazewalk_core::{Cell, Grid, Point};

use crate::algorithm::Algorithm;
use crate::{astar, dijkstra, greedy};

/// Discovered but not yet expanded cells, as flat grid indices.
#[derive(Debug)]
pub(crate) enum Frontier {
    /// FIFO queue (BFS).
    Queue(VecDeque<usize>),
    /// LIFO stack, duplicates allowed (DFS).
    Stack(Vec<usize>),
    /// Unordered open list scanned for the best entry.
    Open(Vec<usize>),
}

/// Outcome of one [`Search::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advance {
    /// A cell other than the target was expanded.
    Expanded(usize),
    /// The target was expanded.
    Reached(usize),
    /// The frontier is empty.
    Exhausted,
}

/// The in-flight state of one search over a grid.
#[derive(Debug)]
pub(crate) struct Search {
    pub(crate) algorithm: Algorithm,
    pub(crate) start: Point,
    pub(crate) target: Point,
    pub(crate) target_idx: usize,
    pub(crate) frontier: Frontier,
    /// Whether a cell currently sits in the queue or open list.
    pub(crate) queued: Vec<bool>,
    nbuf: Vec<usize>,
}

impl Search {
    /// Seed a search. The grid must already be reset and both endpoints
    /// must be valid walkable cells.
    pub(crate) fn new(
        grid: &Grid,
        algorithm: Algorithm,
        start_idx: usize,
        target_idx: usize,
    ) -> Self {
        let frontier = match algorithm {
            Algorithm::Bfs => Frontier::Queue(VecDeque::new()),
            Algorithm::Dfs => Frontier::Stack(Vec::new()),
            Algorithm::AStar | Algorithm::GreedyBestFirst | Algorithm::Dijkstra => {
                Frontier::Open(Vec::new())
            }
        };
        let mut search = Self {
            algorithm,
            start: grid.point(start_idx),
            target: grid.point(target_idx),
            target_idx,
            frontier,
            queued: vec![false; grid.len()],
            nbuf: Vec::with_capacity(4),
        };
        search.push(start_idx);
        search
    }

    /// Add a cell to the frontier.
    pub(crate) fn push(&mut self, idx: usize) {
        match &mut self.frontier {
            Frontier::Queue(q) => {
                q.push_back(idx);
                self.queued[idx] = true;
            }
            Frontier::Stack(s) => s.push(idx),
            Frontier::Open(open) => {
                open.push(idx);
                self.queued[idx] = true;
            }
        }
    }

    /// Take the next cell to expand, or `None` if the frontier is empty.
    fn pop(&mut self, grid: &Grid) -> Option<usize> {
        match &mut self.frontier {
            Frontier::Queue(q) => {
                let i = q.pop_front()?;
                self.queued[i] = false;
                Some(i)
            }
            Frontier::Stack(s) => loop {
                let i = s.pop()?;
                if !grid[i].visited {
                    break Some(i);
                }
            },
            Frontier::Open(open) => {
                if open.is_empty() {
                    return None;
                }
                let prefers: fn(&Cell, &Cell) -> bool = match self.algorithm {
                    Algorithm::AStar => astar::prefers,
                    Algorithm::GreedyBestFirst => greedy::prefers,
                    _ => dijkstra::prefers,
                };
                let mut best = 0;
                for k in 1..open.len() {
                    if prefers(&grid[open[k]], &grid[open[best]]) {
                        best = k;
                    }
                }
                let i = open.remove(best);
                self.queued[i] = false;
                Some(i)
            }
        }
    }

    /// Expand exactly one cell: mark it visited and, unless it is the
    /// target, relax its walkable, unvisited neighbours.
    pub(crate) fn advance(&mut self, grid: &mut Grid) -> Advance {
        let Some(current) = self.pop(grid) else {
            return Advance::Exhausted;
        };
        grid[current].visited = true;
        if current == self.target_idx {
            return Advance::Reached(current);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        let view: &Grid = grid;
        nbuf.extend(
            view.neighbor_indices(current)
                .filter(|&n| view[n].walkable && !view[n].visited),
        );

        match self.algorithm {
            Algorithm::Bfs => self.expand_bfs(grid, current, &nbuf),
            Algorithm::Dfs => self.expand_dfs(grid, current, &nbuf),
            Algorithm::Dijkstra => self.expand_dijkstra(grid, current, &nbuf),
            Algorithm::AStar => self.expand_astar(grid, current, &nbuf),
            Algorithm::GreedyBestFirst => self.expand_greedy(grid, current, &nbuf),
        }

        self.nbuf = nbuf;
        Advance::Expanded(current)
    }
}
