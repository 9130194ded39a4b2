//! Search results and the textual path overlay.

use std::collections::HashSet;

use gridway_core::{Board, Coord};

/// Marker used for interior path cells in textual overlays.
pub const OVERLAY: char = '*';

/// The outcome of one `solve` call.
///
/// Besides the path itself, the report exposes snapshots of the
/// search's internal bookkeeping at termination: the frontier (`open`)
/// and the expansion sequence (`closed`). They carry no semantic weight
/// for correctness and exist for diagnostics and visualization. The
/// closed list is in pop order, which is part of the deterministic
/// output contract; the open snapshot is sorted row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Start-to-goal path, both endpoints included. Empty when no path
    /// exists.
    pub path: Vec<Coord>,
    /// Whether the goal was reached.
    pub success: bool,
    /// Total accumulated cost of the path (0 when unsuccessful).
    pub cost: i64,
    /// Frontier snapshot at termination, sorted.
    pub open: Vec<Coord>,
    /// Expanded coordinates in pop order.
    pub closed: Vec<Coord>,
}

impl SearchReport {
    /// Number of expanded (finalized) cells.
    pub fn expanded(&self) -> usize {
        self.closed.len()
    }

    /// The board's rows with interior path cells replaced by
    /// [`OVERLAY`]. Start and goal keep their marker symbols.
    pub fn overlay(&self, board: &Board) -> Vec<String> {
        let interior: HashSet<Coord> = if self.path.len() > 2 {
            self.path[1..self.path.len() - 1].iter().copied().collect()
        } else {
            HashSet::new()
        };

        board
            .rows()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &ch)| {
                        if interior.contains(&Coord::new(r as i32, c as i32)) {
                            OVERLAY
                        } else {
                            ch
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridway_core::Legend;

    fn report_with_path(path: Vec<Coord>) -> SearchReport {
        SearchReport {
            success: !path.is_empty(),
            cost: 0,
            open: Vec::new(),
            closed: Vec::new(),
            path,
        }
    }

    #[test]
    fn overlay_marks_interior_only() {
        let b = Board::parse("A#B\n.#.\n...", Legend::uniform()).unwrap();
        let path = vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(2, 1),
            Coord::new(2, 2),
            Coord::new(1, 2),
            Coord::new(0, 2),
        ];
        let rows = report_with_path(path).overlay(&b);
        assert_eq!(rows, vec!["A#B", "*#*", "***"]);
    }

    #[test]
    fn overlay_without_path_is_the_board() {
        let b = Board::parse("A#B", Legend::uniform()).unwrap();
        let rows = report_with_path(Vec::new()).overlay(&b);
        assert_eq!(rows, vec!["A#B"]);
    }

    #[test]
    fn single_cell_path_has_no_interior() {
        let b = Board::parse("AB", Legend::uniform()).unwrap();
        let rows = report_with_path(vec![Coord::new(0, 0)]).overlay(&b);
        assert_eq!(rows, vec!["AB"]);
    }
}
