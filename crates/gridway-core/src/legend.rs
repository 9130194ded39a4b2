//! Symbol classification: which characters are passable and what it
//! costs to enter them.

use std::collections::HashMap;

/// Maps board symbols to their meaning.
///
/// A legend names the start and goal markers and assigns an entry cost
/// to every passable terrain symbol. Any symbol absent from the table
/// (and not a marker) is impassable. Costs are charged on entering a
/// cell, so the start cell is never charged; the markers themselves
/// always cost 0 to enter.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Legend {
    start: char,
    goal: char,
    costs: HashMap<char, i64>,
}

impl Legend {
    /// Build a legend from explicit markers and a symbol cost table.
    ///
    /// Marker symbols need no table entry; they are always passable at
    /// cost 0.
    pub fn with_costs(start: char, goal: char, costs: &[(char, i64)]) -> Self {
        Self {
            start,
            goal,
            costs: costs.iter().copied().collect(),
        }
    }

    /// The unweighted legend: `A` start, `B` goal, `.` passable,
    /// everything else impassable.
    pub fn uniform() -> Self {
        Self::with_costs('A', 'B', &[('.', 1)])
    }

    /// The terrain-weighted legend: `A` start and `B` goal at cost 0,
    /// plus water `w` (100), mountain `m` (50), forest `f` (10),
    /// grassland `g` (5) and road `r` (1). Anything else is impassable.
    pub fn terrain() -> Self {
        Self::with_costs(
            'A',
            'B',
            &[('w', 100), ('m', 50), ('f', 10), ('g', 5), ('r', 1)],
        )
    }

    /// The start marker symbol.
    pub fn start(&self) -> char {
        self.start
    }

    /// The goal marker symbol.
    pub fn goal(&self) -> char {
        self.goal
    }

    /// Whether the symbol may be entered at all.
    pub fn is_passable(&self, ch: char) -> bool {
        ch == self.start || ch == self.goal || self.costs.contains_key(&ch)
    }

    /// The cost of entering a cell holding `ch`, or `None` if the
    /// symbol is impassable. Markers cost 0.
    pub fn entry_cost(&self, ch: char) -> Option<i64> {
        if ch == self.start || ch == self.goal {
            return Some(0);
        }
        self.costs.get(&ch).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_classification() {
        let l = Legend::uniform();
        assert!(l.is_passable('A'));
        assert!(l.is_passable('B'));
        assert!(l.is_passable('.'));
        assert!(!l.is_passable('#'));
        assert!(!l.is_passable('x'));
        assert_eq!(l.entry_cost('.'), Some(1));
        assert_eq!(l.entry_cost('#'), None);
    }

    #[test]
    fn terrain_costs() {
        let l = Legend::terrain();
        assert_eq!(l.entry_cost('w'), Some(100));
        assert_eq!(l.entry_cost('m'), Some(50));
        assert_eq!(l.entry_cost('f'), Some(10));
        assert_eq!(l.entry_cost('g'), Some(5));
        assert_eq!(l.entry_cost('r'), Some(1));
        assert_eq!(l.entry_cost('.'), None);
    }

    #[test]
    fn markers_cost_zero() {
        for l in [Legend::uniform(), Legend::terrain()] {
            assert_eq!(l.entry_cost('A'), Some(0));
            assert_eq!(l.entry_cost('B'), Some(0));
        }
    }

    #[test]
    fn custom_markers() {
        let l = Legend::with_costs('S', 'E', &[(' ', 1)]);
        assert!(l.is_passable('S'));
        assert!(l.is_passable(' '));
        assert!(!l.is_passable('A'));
    }
}
