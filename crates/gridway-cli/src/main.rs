//! Command-line driver: load board files, run searches, print results.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use gridway_core::{Board, Legend};
use gridway_paths::{Method, SearchReport, Terrain, Uniform, solve};
use gridway_term::{RenderOptions, render};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest-path search over textual grid maps")]
struct Cli {
    /// Board files to solve, one map per file.
    #[arg(required = true)]
    boards: Vec<PathBuf>,

    /// Search method to run.
    #[arg(long, value_enum, default_value = "astar")]
    method: MethodChoice,

    /// Use the terrain-weighted legend instead of the uniform one.
    #[arg(long)]
    terrain: bool,

    /// Disable ANSI colors in the rendered output.
    #[arg(long)]
    no_color: bool,

    /// Shade visited and frontier cells in the rendered output.
    #[arg(long)]
    show_sets: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum MethodChoice {
    Astar,
    Dijkstra,
    Bfs,
    /// Run all three methods in sequence.
    All,
}

impl MethodChoice {
    fn methods(self) -> Vec<Method> {
        match self {
            Self::Astar => vec![Method::AStar],
            Self::Dijkstra => vec![Method::Dijkstra],
            Self::Bfs => vec![Method::Bfs],
            Self::All => Method::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let opts = RenderOptions {
        color: !cli.no_color,
        show_sets: cli.show_sets,
    };

    for path in &cli.boards {
        run_board(path, &cli, &opts)?;
    }
    Ok(())
}

fn run_board(path: &Path, cli: &Cli, opts: &RenderOptions) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    let legend = if cli.terrain {
        Legend::terrain()
    } else {
        Legend::uniform()
    };
    let board = Board::parse(&text, legend)
        .with_context(|| format!("failed to parse board {}", path.display()))?;

    log::debug!(
        "loaded {} ({}x{} cells)",
        path.display(),
        board.width(),
        board.height()
    );

    println!("{}", path.display());
    for method in cli.method.methods() {
        let report = run_method(&board, cli.terrain, method)
            .with_context(|| format!("search failed on {}", path.display()))?;
        print!("{}", render(&board, Some(&report), opts));
        println!("{}", summary(method, &report));
    }
    println!();
    Ok(())
}

fn run_method(
    board: &Board,
    terrain: bool,
    method: Method,
) -> Result<SearchReport, gridway_paths::SolveError> {
    if terrain {
        solve(board, &Terrain, method)
    } else {
        solve(board, &Uniform, method)
    }
}

fn summary(method: Method, report: &SearchReport) -> String {
    if report.success {
        format!(
            "{method}: path length {}, cost {}, expanded {}",
            report.path.len(),
            report.cost,
            report.expanded()
        )
    } else {
        // An unreachable goal is an expected outcome, not a failure.
        format!("{method}: no path (expanded {})", report.expanded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_choice_expansion() {
        assert_eq!(MethodChoice::Astar.methods(), vec![Method::AStar]);
        assert_eq!(MethodChoice::All.methods().len(), 3);
    }

    #[test]
    fn summary_formats() {
        let report = SearchReport {
            path: vec![],
            success: false,
            cost: 0,
            open: vec![],
            closed: vec![gridway_core::Coord::ZERO],
        };
        assert_eq!(summary(Method::Bfs, &report), "bfs: no path (expanded 1)");
    }

    #[test]
    fn cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
