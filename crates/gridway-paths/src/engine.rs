//! The generalized best-first search engine.
//!
//! One loop serves all three methods; they differ only in how a
//! frontier entry's priority is computed (and in BFS ignoring the
//! strategy's costs). Ties are broken by insertion order, which makes
//! the expansion sequence, and therefore the whole report, a pure
//! deterministic function of the inputs.

use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use gridway_core::{Board, Coord};

use crate::report::SearchReport;
use crate::strategy::Strategy;

/// Search method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Best-first with heuristic guidance.
    AStar,
    /// Uniform-cost search, priority is accumulated cost alone.
    Dijkstra,
    /// Breadth-first, pure FIFO regardless of cost.
    Bfs,
}

impl Method {
    /// All methods, in display order.
    pub const ALL: [Method; 3] = [Method::AStar, Method::Dijkstra, Method::Bfs];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Method::AStar => "astar",
            Method::Dijkstra => "dijkstra",
            Method::Bfs => "bfs",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "astar" => Ok(Method::AStar),
            "dijkstra" => Ok(Method::Dijkstra),
            "bfs" => Ok(Method::Bfs),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// An unrecognized method name.
#[derive(Debug, Clone)]
pub struct ParseMethodError(String);

impl fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown method \u{201c}{}\u{201d} (expected astar, dijkstra or bfs)", self.0)
    }
}

impl std::error::Error for ParseMethodError {}

/// Precondition violations of `solve`, distinct from "no path exists"
/// (which is a successful call with `success = false`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The start coordinate is out of bounds or impassable.
    ImpassableStart(Coord),
    /// The goal coordinate is out of bounds or impassable.
    ImpassableGoal(Coord),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImpassableStart(c) => write!(f, "solve: start {c} is not passable"),
            Self::ImpassableGoal(c) => write!(f, "solve: goal {c} is not passable"),
        }
    }
}

impl std::error::Error for SolveError {}

/// A frontier entry, ordered for a min-heap: lowest priority first,
/// earliest insertion first on ties.
#[derive(Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    priority: i64,
    seq: u64,
    coord: Coord,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the smallest
        // (priority, seq) first.
        other
            .priority
            .cmp(&self.priority)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Solve the board from its start marker to its goal marker.
pub fn solve<S: Strategy>(
    board: &Board,
    strategy: &S,
    method: Method,
) -> Result<SearchReport, SolveError> {
    solve_between(board, strategy, board.start(), board.goal(), method)
}

/// Solve between explicit endpoints.
///
/// `start == goal` is a valid zero-length query and succeeds
/// immediately with the single-cell path. An unreachable goal is not an
/// error: the report comes back with `success = false`, an empty path
/// and the final bookkeeping snapshots.
pub fn solve_between<S: Strategy>(
    board: &Board,
    strategy: &S,
    start: Coord,
    goal: Coord,
    method: Method,
) -> Result<SearchReport, SolveError> {
    if !board.is_passable(start) {
        return Err(SolveError::ImpassableStart(start));
    }
    if !board.is_passable(goal) {
        return Err(SolveError::ImpassableGoal(goal));
    }

    // All search state is local to this call; the board is never
    // touched except through read-only queries.
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();
    let mut g_score: HashMap<Coord, i64> = HashMap::new();
    let mut open_set: HashSet<Coord> = HashSet::new();
    let mut closed_set: HashSet<Coord> = HashSet::new();
    let mut closed: Vec<Coord> = Vec::new();
    let mut heap: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut nbuf: Vec<Coord> = Vec::with_capacity(4);

    g_score.insert(start, 0);
    open_set.insert(start);
    heap.push(FrontierEntry {
        priority: match method {
            Method::AStar => strategy.estimate(start, goal),
            Method::Dijkstra | Method::Bfs => 0,
        },
        seq,
        coord: start,
    });
    seq += 1;

    let mut found = false;
    while let Some(entry) = heap.pop() {
        let current = entry.coord;
        // Duplicate heap entries for an already-expanded coordinate are
        // stale; skip them.
        if closed_set.contains(&current) {
            continue;
        }

        open_set.remove(&current);
        closed_set.insert(current);
        closed.push(current);

        if current == goal {
            found = true;
            break;
        }

        let current_g = g_score.get(&current).copied().unwrap_or(0);
        nbuf.clear();
        board.push_neighbors(current, &mut nbuf);

        for &nb in &nbuf {
            // Closed cells are final under non-negative costs.
            if closed_set.contains(&nb) {
                continue;
            }
            let step = match method {
                // BFS is cost-blind: every step counts 1.
                Method::Bfs => 1,
                Method::AStar | Method::Dijkstra => strategy.cost(board, current, nb),
            };
            let tentative = current_g + step;
            if g_score.get(&nb).is_none_or(|&g| tentative < g) {
                came_from.insert(nb, current);
                g_score.insert(nb, tentative);
                let priority = match method {
                    Method::AStar => tentative + strategy.estimate(nb, goal),
                    Method::Dijkstra => tentative,
                    Method::Bfs => seq as i64,
                };
                heap.push(FrontierEntry {
                    priority,
                    seq,
                    coord: nb,
                });
                seq += 1;
                open_set.insert(nb);
            }
        }
    }

    let (path, cost) = if found {
        let mut path = vec![goal];
        let mut cur = goal;
        while let Some(&prev) = came_from.get(&cur) {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        (path, g_score.get(&goal).copied().unwrap_or(0))
    } else {
        (Vec::new(), 0)
    };

    let mut open: Vec<Coord> = open_set.into_iter().collect();
    open.sort();

    log::debug!(
        "{method}: {} in {} expansions (path len {}, cost {cost})",
        if found { "reached goal" } else { "exhausted frontier" },
        closed.len(),
        path.len(),
    );

    Ok(SearchReport {
        path,
        success: found,
        cost,
        open,
        closed,
    })
}
