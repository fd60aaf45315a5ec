//! Maze generation for mazewalk: recursive-backtracker carving with
//! braiding, and a random-density fallback.
//!
//! Generators only produce a [`MazeLayout`](mazewalk_core::MazeLayout);
//! turning it into a [`Grid`](mazewalk_core::Grid) is the caller's job.

pub mod mazegen;

pub use mazegen::{MazeConfig, MazeGen, MazeStrategy};
