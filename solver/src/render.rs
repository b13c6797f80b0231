//! Colored terminal rendering of a grid and of a search replay.

use std::collections::HashSet;

use colored::{ColoredString, Colorize};

use crate::maze::{Cell, Grid, Point};
use crate::search::SearchOutcome;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Plain,
    Visited,
    Path,
    Cursor,
}

fn glyph(grid: &Grid, pos: Point, cell: Cell, mark: Mark) -> ColoredString {
    if pos == grid.start() {
        return "A".green().bold();
    }
    if pos == grid.goal() {
        return "B".red().bold();
    }

    match (cell, mark) {
        (Cell::Wall, _) => "#".bright_black(),
        (_, Mark::Cursor) => "@".yellow().bold(),
        (_, Mark::Path) => "*".magenta().bold(),
        (Cell::Open { cost: 1 }, Mark::Visited) => "·".blue(),
        (Cell::Open { cost: 1 }, Mark::Plain) => " ".normal(),
        (Cell::Open { cost }, Mark::Visited) => cost.to_string().blue(),
        (Cell::Open { cost }, Mark::Plain) => cost.to_string().yellow(),
    }
}

fn draw(grid: &Grid, mark_of: impl Fn(Point) -> Mark) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() + 1) * 4);
    for (pos, cell) in grid.iter() {
        if pos.col == 0 && pos.row > 0 {
            out.push('\n');
        }
        out.push_str(&glyph(grid, pos, cell, mark_of(pos)).to_string());
    }
    out
}

/// The maze as loaded, walls and weights only.
pub fn render_grid(grid: &Grid) -> String {
    draw(grid, |_| Mark::Plain)
}

/// The finished search: every explored cell plus the solution path.
pub fn render_outcome(grid: &Grid, outcome: &SearchOutcome) -> String {
    let explored: HashSet<Point> = outcome.explored.iter().copied().collect();
    let path: HashSet<Point> = outcome.solution.path.iter().copied().collect();

    draw(grid, |pos| {
        if path.contains(&pos) {
            Mark::Path
        } else if explored.contains(&pos) {
            Mark::Visited
        } else {
            Mark::Plain
        }
    })
}

/// One animation frame: cells made current by `trace[..=step]`, with the
/// cursor on `trace[step]`.
pub fn render_frame(grid: &Grid, trace: &[Point], step: usize) -> String {
    let step = step.min(trace.len().saturating_sub(1));
    let visited: HashSet<Point> = trace.iter().take(step + 1).copied().collect();
    let cursor = trace.get(step).copied();

    draw(grid, |pos| {
        if Some(pos) == cursor {
            Mark::Cursor
        } else if visited.contains(&pos) {
            Mark::Visited
        } else {
            Mark::Plain
        }
    })
}

/// Every trace frame in order, then the final frame with the solution.
pub fn frames<'a>(grid: &'a Grid, outcome: &'a SearchOutcome) -> impl Iterator<Item = String> + 'a {
    (0..outcome.trace.len())
        .map(move |step| render_frame(grid, &outcome.trace, step))
        .chain(std::iter::once_with(move || render_outcome(grid, outcome)))
}
