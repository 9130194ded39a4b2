//! Terminal rendering of boards and search results.
//!
//! [`render`] produces a bordered textual grid as a `String`, with ANSI
//! styling inlined via crossterm when color is enabled. This crate is
//! the only place presentation concerns live; the search crates never
//! format output.

use std::collections::HashSet;
use std::fmt::Write;

use crossterm::style::{Color, Stylize};

use gridway_core::{Board, Coord};
use gridway_paths::{OVERLAY, SearchReport};

/// Rendering switches.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit ANSI colors. When off, output is plain text.
    pub color: bool,
    /// Shade the search bookkeeping: expanded cells dimmed, frontier
    /// cells underlined. Only visible in color mode.
    pub show_sets: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            show_sets: false,
        }
    }
}

/// Terrain display color for a symbol, or `None` for the default.
fn symbol_color(ch: char) -> Option<Color> {
    match ch {
        'w' => Some(Color::Blue),
        'm' => Some(Color::DarkGrey),
        'f' => Some(Color::DarkGreen),
        'g' => Some(Color::Green),
        'r' => Some(Color::White),
        '#' => Some(Color::DarkRed),
        _ => None,
    }
}

/// Render a board, optionally overlaid with a search report, inside a
/// box-drawing border.
pub fn render(board: &Board, report: Option<&SearchReport>, opts: &RenderOptions) -> String {
    let rows: Vec<String> = match report {
        Some(r) => r.overlay(board),
        None => board.rows().map(|r| r.iter().collect()).collect(),
    };

    let (open, closed): (HashSet<Coord>, HashSet<Coord>) = match report {
        Some(r) if opts.show_sets => (
            r.open.iter().copied().collect(),
            r.closed.iter().copied().collect(),
        ),
        _ => (HashSet::new(), HashSet::new()),
    };

    let width = board.width() as usize;
    let mut out = String::new();
    let _ = writeln!(out, "\u{250c}{}\u{2510}", "\u{2500}".repeat(width));
    for (r, row) in rows.iter().enumerate() {
        out.push('\u{2502}');
        for (c, ch) in row.chars().enumerate() {
            let coord = Coord::new(r as i32, c as i32);
            if opts.color {
                out.push_str(&styled(board, coord, ch, &open, &closed));
            } else {
                out.push(ch);
            }
        }
        out.push('\u{2502}');
        out.push('\n');
    }
    let _ = writeln!(out, "\u{2514}{}\u{2518}", "\u{2500}".repeat(width));
    out
}

/// Style one cell for color output.
fn styled(
    board: &Board,
    coord: Coord,
    ch: char,
    open: &HashSet<Coord>,
    closed: &HashSet<Coord>,
) -> String {
    let text = ch.to_string();
    if coord == board.start() || coord == board.goal() {
        return text.with(Color::Magenta).bold().to_string();
    }
    if ch == OVERLAY {
        return text.with(Color::Yellow).bold().to_string();
    }
    let base = match symbol_color(ch) {
        Some(color) => text.with(color),
        None => text.stylize(),
    };
    if closed.contains(&coord) {
        return base.dim().to_string();
    }
    if open.contains(&coord) {
        return base.underlined().to_string();
    }
    base.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridway_core::Legend;
    use gridway_paths::{Method, Uniform, solve};

    fn plain() -> RenderOptions {
        RenderOptions {
            color: false,
            show_sets: false,
        }
    }

    #[test]
    fn bordered_board_without_report() {
        let b = Board::parse("A#B\n.#.\n...", Legend::uniform()).unwrap();
        let out = render(&b, None, &plain());
        assert_eq!(
            out,
            "\u{250c}\u{2500}\u{2500}\u{2500}\u{2510}\n\
             \u{2502}A#B\u{2502}\n\
             \u{2502}.#.\u{2502}\n\
             \u{2502}...\u{2502}\n\
             \u{2514}\u{2500}\u{2500}\u{2500}\u{2518}\n"
        );
    }

    #[test]
    fn path_overlay_in_plain_output() {
        let b = Board::parse("A#B\n.#.\n...", Legend::uniform()).unwrap();
        let report = solve(&b, &Uniform, Method::AStar).unwrap();
        let out = render(&b, Some(&report), &plain());
        assert!(out.contains("\u{2502}*#*\u{2502}"));
        assert!(out.contains("\u{2502}***\u{2502}"));
        // Markers keep their symbols.
        assert!(out.contains("\u{2502}A#B\u{2502}"));
    }

    #[test]
    fn color_output_carries_ansi() {
        let b = Board::parse("AB", Legend::uniform()).unwrap();
        let out = render(&b, None, &RenderOptions::default());
        assert!(out.contains('\u{1b}'));
    }
}
