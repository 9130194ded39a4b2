//! The immutable board grid, parsed from text.

use std::fmt;

use crate::geom::Coord;
use crate::legend::Legend;

/// A rectangular character grid with one start and one goal cell.
///
/// Boards are parsed once from text and never mutated. The first input
/// line fixes the board width; any later line of a different width is
/// silently excluded rather than rejected. This leniency is inherited
/// observable behavior and is pinned by tests; a warning is logged for
/// each dropped line.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<char>,
    width: i32,
    height: i32,
    legend: Legend,
    start: Coord,
    goal: Coord,
}

impl Board {
    /// Parse a board from text, one row per line.
    ///
    /// Fails if the input is empty, or if the legend's start and goal
    /// markers are not each present exactly once among the kept rows.
    pub fn parse(text: &str, legend: Legend) -> Result<Self, BoardError> {
        let mut lines = text.split('\n');
        let first = lines.next().unwrap_or("");
        let width = first.chars().count();
        if width == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells: Vec<char> = first.chars().collect();
        let mut height = 1;
        for line in lines {
            if line.chars().count() != width {
                if !line.is_empty() {
                    log::warn!(
                        "dropping line of width {} (board width is {width}): {line:?}",
                        line.chars().count()
                    );
                }
                continue;
            }
            cells.extend(line.chars());
            height += 1;
        }

        let start = Self::find_marker(&cells, width, legend.start())?;
        let goal = Self::find_marker(&cells, width, legend.goal())?;

        Ok(Self {
            cells,
            width: width as i32,
            height,
            legend,
            start,
            goal,
        })
    }

    /// Locate the unique cell holding `marker`.
    fn find_marker(cells: &[char], width: usize, marker: char) -> Result<Coord, BoardError> {
        let mut found = None;
        for (i, &ch) in cells.iter().enumerate() {
            if ch == marker {
                if found.is_some() {
                    return Err(BoardError::DuplicateMarker(marker));
                }
                found = Some(Coord::new((i / width) as i32, (i % width) as i32));
            }
        }
        found.ok_or(BoardError::MissingMarker(marker))
    }

    /// Board width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// The symbol legend this board was parsed with.
    #[inline]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Whether `c` lies inside the board rectangle.
    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.height && c.col >= 0 && c.col < self.width
    }

    /// The symbol at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<char> {
        if !self.in_bounds(c) {
            return None;
        }
        Some(self.cells[(c.row * self.width + c.col) as usize])
    }

    /// The symbol at `c`. Out-of-bounds coordinates are a caller error
    /// and reported as [`BoardError::OutOfBounds`].
    pub fn symbol_at(&self, c: Coord) -> Result<char, BoardError> {
        self.at(c).ok_or(BoardError::OutOfBounds(c))
    }

    /// Whether `c` is inside the board and holds a passable symbol.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(|ch| self.legend.is_passable(ch))
    }

    /// The cost of entering `c`, or `None` if `c` is out of bounds or
    /// impassable.
    #[inline]
    pub fn entry_cost(&self, c: Coord) -> Option<i64> {
        self.at(c).and_then(|ch| self.legend.entry_cost(ch))
    }

    /// Append the passable cardinal neighbors of `c` into `buf`, in the
    /// fixed order `+row, +col, -row, -col`. The caller clears `buf`.
    pub fn push_neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for n in c.neighbors_4() {
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }

    /// The passable cardinal neighbors of `c`, in fixed order.
    pub fn neighbors(&self, c: Coord) -> Vec<Coord> {
        let mut buf = Vec::with_capacity(4);
        self.push_neighbors(c, &mut buf);
        buf
    }

    /// Iterate over the board's rows as character slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width as usize)
    }
}

/// Errors from board construction and cell access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The input text has no cells.
    Empty,
    /// A marker symbol does not appear in the board.
    MissingMarker(char),
    /// A marker symbol appears more than once.
    DuplicateMarker(char),
    /// A cell query outside the board rectangle.
    OutOfBounds(Coord),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board: empty input"),
            Self::MissingMarker(ch) => write!(f, "board: missing \u{201c}{ch}\u{201d} marker"),
            Self::DuplicateMarker(ch) => {
                write!(f, "board: marker \u{201c}{ch}\u{201d} appears more than once")
            }
            Self::OutOfBounds(c) => write!(f, "board: coordinate {c} out of bounds"),
        }
    }
}

impl std::error::Error for BoardError {}
