//! Shortest-path search over [`gridway_core::Board`] grids.
//!
//! One generalized best-first engine runs all three supported methods:
//!
//! - **A\*** — priority = accumulated cost + heuristic ([`Method::AStar`])
//! - **Dijkstra** — priority = accumulated cost ([`Method::Dijkstra`])
//! - **BFS** — priority = insertion order, cost-blind ([`Method::Bfs`])
//!
//! The per-step cost and heuristic come from a pluggable [`Strategy`]
//! ([`Uniform`] or [`Terrain`]). Results are returned as a
//! [`SearchReport`] carrying the path together with the frontier and
//! visited-set snapshots for inspection and rendering.
//!
//! Searches are deterministic: ties in the frontier are broken by
//! insertion order, so identical inputs always produce the identical
//! path and the identical expansion order.

mod distance;
mod engine;
mod report;
mod strategy;

pub use distance::manhattan;
pub use engine::{Method, ParseMethodError, SolveError, solve, solve_between};
pub use report::{OVERLAY, SearchReport};
pub use strategy::{Strategy, Terrain, Uniform};
