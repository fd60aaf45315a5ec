//! The stepping search engine.
//!
//! A [`Pathfinder`] owns one [`Grid`] and runs at most one search over it at a
//! time. Each call to [`Pathfinder::step`] hands back a single
//! [`SearchEvent`], so a caller can animate a search at whatever pace it
//! likes; [`Pathfinder::run_to_completion`] drives the same machinery in one
//! go.

use std::collections::VecDeque;

use log::{debug, error, info, warn};
use mazewalk_core::{CostLevel, Grid, Point};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::events::{FailReason, SearchEvent};
use crate::frontier::{Advance, Search};
use crate::retrace::{SearchResult, retrace};

/// Owner of a grid and its single in-flight search.
///
/// A search counts as running from a successful [`start`](Self::start) until
/// its terminal event has been handed out by [`step`](Self::step), or until it
/// is cancelled.
#[derive(Debug)]
pub struct Pathfinder {
    grid: Grid,
    active: Option<Search>,
    /// Set once the target has been expanded; the path is traced on the
    /// following step.
    reached: Option<Search>,
    pending: VecDeque<SearchEvent>,
    algorithm: Option<Algorithm>,
}

impl Pathfinder {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            active: None,
            reached: None,
            pending: VecDeque::new(),
            algorithm: None,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Swap in a new grid, cancelling any running search. Returns the old
    /// grid.
    pub fn replace_grid(&mut self, grid: Grid) -> Grid {
        self.cancel();
        std::mem::replace(&mut self.grid, grid)
    }

    /// Whether a search is running or still has events to deliver.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.active.is_some() || self.reached.is_some() || !self.pending.is_empty()
    }

    /// Algorithm of the running or most recent search.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Cells expanded so far by the running or most recent search.
    pub fn nodes_explored(&self) -> usize {
        self.grid.count_visited()
    }

    /// Cycle the cost level of a walkable cell. Rejected while a search is
    /// running.
    pub fn toggle_cost(&mut self, p: Point) -> Result<CostLevel, SearchError> {
        if self.is_running() {
            warn!("cost edit at {p} rejected: search in progress");
            return Err(SearchError::EditDuringSearch);
        }
        Ok(self.grid.toggle_cost(p)?)
    }

    fn endpoint(&self, p: Point) -> Result<usize, SearchError> {
        self.grid
            .idx(p)
            .filter(|&i| self.grid[i].walkable)
            .ok_or(SearchError::InvalidEndpoint(p))
    }

    /// Begin a search from `start` to `target`.
    ///
    /// Both endpoints are validated before the grid is touched. On success
    /// every cell's search state is cleared and the frontier holds `start`.
    pub fn start(
        &mut self,
        start: Point,
        target: Point,
        algorithm: Algorithm,
    ) -> Result<(), SearchError> {
        if self.is_running() {
            return Err(SearchError::SearchAlreadyRunning);
        }
        let start_idx = self.endpoint(start)?;
        let target_idx = self.endpoint(target)?;

        self.grid.reset();
        self.active = Some(Search::new(&self.grid, algorithm, start_idx, target_idx));
        self.algorithm = Some(algorithm);
        debug!("{algorithm} search started: {start} -> {target}");
        Ok(())
    }

    /// Deliver the next event, expanding one cell if none is queued.
    ///
    /// Returns `Ok(None)` once no search is running. A broken parent chain
    /// is reported on the step after the target's `CellVisited`.
    pub fn step(&mut self) -> Result<Option<SearchEvent>, SearchError> {
        if let Some(ev) = self.pending.pop_front() {
            return Ok(Some(ev));
        }
        if let Some(search) = self.reached.take() {
            return self.finish(&search).map(Some);
        }
        let Some(search) = self.active.as_mut() else {
            return Ok(None);
        };

        match search.advance(&mut self.grid) {
            Advance::Expanded(i) => Ok(Some(SearchEvent::CellVisited(self.grid.point(i)))),
            Advance::Reached(i) => {
                self.reached = self.active.take();
                Ok(Some(SearchEvent::CellVisited(self.grid.point(i))))
            }
            Advance::Exhausted => {
                let (start, target, algorithm) = (search.start, search.target, search.algorithm);
                self.active = None;
                info!(
                    "{algorithm}: no path {start} -> {target}, {} explored",
                    self.grid.count_visited()
                );
                Ok(Some(SearchEvent::SearchFailed(FailReason::FrontierExhausted)))
            }
        }
    }

    /// Trace the path of a search whose target was expanded, queue its
    /// path events and hand back the first of them.
    fn finish(&mut self, search: &Search) -> Result<SearchEvent, SearchError> {
        let (start, target, algorithm) = (search.start, search.target, search.algorithm);
        let result = retrace(&mut self.grid, start, target, algorithm).inspect_err(|e| {
            error!("{algorithm} reached {target} but the path is broken: {e}");
        })?;
        info!(
            "{algorithm}: path of {} cells, cost {}, {} explored",
            result.path_len(),
            result.total_cost,
            result.nodes_explored
        );
        let steps = result
            .path
            .iter()
            .enumerate()
            .map(|(step, &pos)| SearchEvent::PathStepMarked { pos, step });
        self.pending.extend(steps);
        self.pending.push_back(SearchEvent::SearchCompleted(result));
        self.pending
            .pop_front()
            .ok_or(SearchError::NotRunning)
    }

    /// Drop the running search and any undelivered events. Returns whether
    /// there was anything to cancel.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        self.active = None;
        self.reached = None;
        self.pending.clear();
        if was_running {
            debug!("search cancelled");
        }
        was_running
    }

    /// Step the running search to its end, passing the grid and every event
    /// to `sink` as they happen.
    ///
    /// A search that exhausts its frontier yields a result with
    /// `found == false`.
    pub fn run_with<F>(&mut self, mut sink: F) -> Result<SearchResult, SearchError>
    where
        F: FnMut(&Grid, &SearchEvent),
    {
        let algorithm = match self.algorithm {
            Some(a) if self.is_running() => a,
            _ => return Err(SearchError::NotRunning),
        };
        while let Some(ev) = self.step()? {
            sink(&self.grid, &ev);
            match ev {
                SearchEvent::SearchCompleted(result) => return Ok(result),
                SearchEvent::SearchFailed(_) => {
                    return Ok(SearchResult::not_found(algorithm, self.nodes_explored()));
                }
                _ => {}
            }
        }
        Err(SearchError::NotRunning)
    }

    #[inline]
    pub fn run_to_completion(&mut self) -> Result<SearchResult, SearchError> {
        self.run_with(|_, _| {})
    }

    /// [`start`](Self::start) followed by [`run_to_completion`](Self::run_to_completion).
    pub fn find_path(
        &mut self,
        start: Point,
        target: Point,
        algorithm: Algorithm,
    ) -> Result<SearchResult, SearchError> {
        self.start(start, target, algorithm)?;
        self.run_to_completion()
    }
}
