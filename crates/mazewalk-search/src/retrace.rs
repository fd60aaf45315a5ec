//! Path reconstruction from the parent links a search leaves in the grid.

use mazewalk_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::error::SearchError;

/// Terminal output of one search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub found: bool,
    /// Cells from the start (excluded) to the target (included).
    pub path: Vec<Point>,
    /// Sum of the weights of the cells in `path`.
    pub total_cost: f32,
    /// Cells expanded during the search.
    pub nodes_explored: usize,
    pub algorithm: Algorithm,
}

impl SearchResult {
    /// Result of a search that ended without reaching the target.
    pub fn not_found(algorithm: Algorithm, nodes_explored: usize) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            total_cost: 0.0,
            nodes_explored,
            algorithm,
        }
    }

    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }
}

/// Walk parent links from `target` back to `start` and build the result.
///
/// At most `width · height` hops are taken; a chain that is longer, or that
/// stops before reaching `start`, yields [`SearchError::NoPathExists`] and
/// leaves the grid untouched. On success every path cell gets
/// `on_path = true`.
pub fn retrace(
    grid: &mut Grid,
    start: Point,
    target: Point,
    algorithm: Algorithm,
) -> Result<SearchResult, SearchError> {
    let start_idx = grid.idx(start).ok_or(SearchError::InvalidEndpoint(start))?;
    let target_idx = grid.idx(target).ok_or(SearchError::InvalidEndpoint(target))?;
    let broken = SearchError::NoPathExists { start, target };

    let mut chain = Vec::new();
    let mut ci = target_idx;
    while ci != start_idx {
        if chain.len() >= grid.len() {
            return Err(broken);
        }
        chain.push(ci);
        ci = grid[ci].parent.ok_or_else(|| broken.clone())?;
    }
    chain.reverse();

    let mut total_cost = 0.0;
    for &i in &chain {
        let cell = &mut grid[i];
        cell.on_path = true;
        total_cost += cell.weight() as f32;
    }

    Ok(SearchResult {
        found: true,
        path: chain.iter().map(|&i| grid.point(i)).collect(),
        total_cost,
        nodes_explored: grid.count_visited(),
        algorithm,
    })
}
