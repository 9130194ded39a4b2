//! Pluggable cost and heuristic strategies.

use gridway_core::{Board, Coord};

use crate::distance::manhattan;

/// Edge cost and heuristic supplier for a search.
///
/// `cost` prices a move between adjacent passable cells and must be
/// non-negative. `estimate` must never overestimate the true remaining
/// cost (admissible) for A* to stay optimal.
pub trait Strategy {
    /// Cost of moving from `from` to the adjacent cell `to`.
    fn cost(&self, board: &Board, from: Coord, to: Coord) -> i64;

    /// Heuristic estimate of the remaining cost from `a` to `goal`.
    fn estimate(&self, a: Coord, goal: Coord) -> i64;
}

/// Uniform-cost strategy: every step costs 1, no heuristic.
///
/// The zero estimate degrades A* into Dijkstra, which is the intended
/// behavior for unweighted boards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Strategy for Uniform {
    fn cost(&self, _board: &Board, _from: Coord, _to: Coord) -> i64 {
        1
    }

    fn estimate(&self, _a: Coord, _goal: Coord) -> i64 {
        0
    }
}

/// Terrain-weighted strategy: a move costs the destination cell's
/// legend entry cost, and the heuristic is Manhattan distance.
///
/// Manhattan distance is admissible here because every terrain symbol
/// costs at least 1 per step and moves are axis-aligned unit steps;
/// the zero-cost goal marker cannot cause an overestimate since the
/// estimate at the goal itself is 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terrain;

impl Strategy for Terrain {
    fn cost(&self, board: &Board, _from: Coord, to: Coord) -> i64 {
        // `to` comes from Board::neighbors, which only yields passable
        // cells, so the entry cost is always present.
        board.entry_cost(to).unwrap_or_default()
    }

    fn estimate(&self, a: Coord, goal: Coord) -> i64 {
        manhattan(a, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridway_core::Legend;

    #[test]
    fn uniform_is_flat() {
        let b = Board::parse("AB", Legend::uniform()).unwrap();
        let s = Uniform;
        assert_eq!(s.cost(&b, Coord::new(0, 0), Coord::new(0, 1)), 1);
        assert_eq!(s.estimate(Coord::new(0, 0), Coord::new(9, 9)), 0);
    }

    #[test]
    fn terrain_prices_destination() {
        let b = Board::parse("Aw\ngB", Legend::terrain()).unwrap();
        let s = Terrain;
        // Entering water.
        assert_eq!(s.cost(&b, Coord::new(0, 0), Coord::new(0, 1)), 100);
        // Entering grassland.
        assert_eq!(s.cost(&b, Coord::new(1, 1), Coord::new(1, 0)), 5);
        // Entering the goal marker is free.
        assert_eq!(s.cost(&b, Coord::new(1, 0), Coord::new(1, 1)), 0);
    }

    #[test]
    fn terrain_estimate_is_manhattan() {
        let s = Terrain;
        assert_eq!(s.estimate(Coord::new(0, 0), Coord::new(2, 3)), 5);
    }
}
