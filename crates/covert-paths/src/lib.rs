//! Route search on an unbounded 4-connected grid.
//!
//! This crate provides the search engine behind *covert*:
//!
//! - **A\*** shortest-route search ([`Pathfinder::find_path`]), returning a
//!   [`Route`] of cardinal moves
//! - **BFS** unit-cost distance maps ([`Pathfinder::bfs_map`])
//!
//! The grid is never materialized: only cells a search actually touches get
//! bookkeeping entries, so coordinates are unbounded unless a
//! [`SearchConfig`] restricts them.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod config;
mod distance;
mod pathfinder;
mod route;
mod traits;

pub use config::{BlockedStart, SearchConfig};
pub use distance::manhattan;
pub use pathfinder::{PathNode, Pathfinder, UNREACHABLE};
pub use route::Route;
pub use traits::{AstarPather, Pather, WeightedPather};
