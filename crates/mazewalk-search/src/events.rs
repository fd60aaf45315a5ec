use std::fmt;

use mazewalk_core::Point;

use crate::retrace::SearchResult;

/// One observable step of a search, delivered by
/// [`Pathfinder::step`](crate::Pathfinder::step).
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// A cell was expanded and marked visited.
    CellVisited(Point),
    /// A cell of the found path, `step` counting from 0 next to the start.
    /// The target is included as the last step; the start never is.
    PathStepMarked { pos: Point, step: usize },
    /// The target was reached. Always the last event of a successful search.
    SearchCompleted(SearchResult),
    /// The search ended without reaching the target.
    SearchFailed(FailReason),
}

impl SearchEvent {
    /// Whether this event ends the search.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::SearchCompleted(_) | Self::SearchFailed(_))
    }
}

/// Why a search ended without a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailReason {
    /// Every reachable cell was expanded.
    FrontierExhausted,
}

impl fmt::Display for FailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrontierExhausted => f.write_str("frontier exhausted before reaching the target"),
        }
    }
}
