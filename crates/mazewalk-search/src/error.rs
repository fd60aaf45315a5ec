use mazewalk_core::{GridError, Point};
use thiserror::Error;

/// Errors returned by the search engine.
///
/// A search that exhausts its frontier is not an error; it ends with
/// [`SearchEvent::SearchFailed`](crate::SearchEvent::SearchFailed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Start or target is out of bounds or not walkable.
    #[error("endpoint {0} is out of bounds or not walkable")]
    InvalidEndpoint(Point),
    #[error("a search is already running")]
    SearchAlreadyRunning,
    #[error("no search is running")]
    NotRunning,
    /// The parent chain from the target does not lead back to the start.
    /// After a successful expansion this means the relaxation logic is
    /// broken.
    #[error("parent chain from {target} does not lead back to {start}")]
    NoPathExists { start: Point, target: Point },
    #[error("cost edits are rejected while a search is running")]
    EditDuringSearch,
    #[error(transparent)]
    Grid(#[from] GridError),
}
