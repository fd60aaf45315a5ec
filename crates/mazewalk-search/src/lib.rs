//! Step-observable grid search for mazewalk.
//!
//! Five interchangeable algorithms run over a [`Grid`](mazewalk_core::Grid)
//! owned by a [`Pathfinder`]:
//!
//! - **BFS**: fewest steps, weights ignored
//! - **DFS**: any path
//! - **Dijkstra**: cheapest path
//! - **A\***: cheapest path, guided by [`manhattan`] distance
//! - **Greedy best-first**: guided by [`manhattan`] distance alone
//!
//! A search is driven one expansion at a time with [`Pathfinder::step`],
//! which yields a [`SearchEvent`] per call, or in one go with
//! [`Pathfinder::run_to_completion`].
//!
//! Entering a cell costs its weight; the start cell costs nothing. Ties
//! are broken by neighbour order `(x, y+1), (x, y-1), (x-1, y), (x+1, y)`
//! and then by insertion order, so every search is deterministic.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod events;
mod frontier;
mod greedy;
mod pathfinder;
mod retrace;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use distance::manhattan;
pub use error::SearchError;
pub use events::{FailReason, SearchEvent};
pub use pathfinder::Pathfinder;
pub use retrace::{SearchResult, retrace};
