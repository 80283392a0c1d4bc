//! Path search over tile maps.
//!
//! This crate provides four interchangeable search strategies on 2D grids:
//!
//! - **Breadth-first** shortest-path search ([`PathFinder::bfs_path`])
//! - **Depth-limited** backtracking search ([`PathFinder::dls_path`])
//! - **Iterative deepening** ([`PathFinder::ids_path`])
//! - **A\*** heuristic search ([`PathFinder::astar_path`])
//!
//! All strategies operate through [`PathFinder`], which owns its working
//! storage and reuses it across queries. Every search runs to completion
//! and returns either a full start→destination path or `None`; there are
//! no partial results. Progress can be observed through a [`Trace`] sink,
//! which receives one event per expanded position.
//!
//! # Guarantees
//!
//! | Strategy | Finds shortest path | Failure means |
//! |---|---|---|
//! | BFS | yes | destination unreachable |
//! | Depth-limited | no | depth budget exhausted |
//! | Iterative deepening | no (see [`PathFinder::ids_path`]) | destination unreachable |
//! | A* | yes | destination unreachable |

mod astar;
mod bfs;
mod distance;
mod dls;
mod finder;
mod ids;
mod trace;
mod traits;

pub use distance::manhattan;
pub use finder::PathFinder;
pub use trace::{NoTrace, Trace, TraceEvent, TraceFn, TraceRecorder};
pub use traits::Pather;
