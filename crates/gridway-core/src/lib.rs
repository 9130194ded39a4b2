//! Core types for grid-based shortest-path boards.
//!
//! A [`Board`] is an immutable rectangular character grid parsed from
//! plain text, with exactly one start marker and one goal marker. A
//! [`Legend`] classifies symbols into passable terrain (with an entry
//! cost) and impassable cells. [`Coord`] identifies a cell by
//! `(row, col)` and is the sole node identity used by the search crates.

mod board;
mod geom;
mod legend;

pub use board::{Board, BoardError};
pub use geom::Coord;
pub use legend::Legend;
