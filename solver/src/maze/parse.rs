use std::str::FromStr;

use super::{cell::Cell, grid::Grid, position::Point};
use crate::error::{Error, Result};

/// Decodes one maze character into a cell, flagging the start and goal
/// markers.
fn decode(ch: char, row: usize, col: usize) -> Result<(Cell, Option<Marker>)> {
    match ch {
        'A' => Ok((Cell::open(), Some(Marker::Start))),
        'B' => Ok((Cell::open(), Some(Marker::Goal))),
        ' ' => Ok((Cell::open(), None)),
        '#' => Ok((Cell::Wall, None)),
        '2'..='9' => {
            let cost = ch.to_digit(10).ok_or(Error::InvalidCell { row, col, ch })?;
            Ok((Cell::Open { cost }, None))
        }
        _ => Err(Error::InvalidCell { row, col, ch }),
    }
}

#[derive(Clone, Copy)]
enum Marker {
    Start,
    Goal,
}

impl FromStr for Grid {
    type Err = Error;

    /// `A` start, `B` goal, `#` wall, space for cost 1, `2`-`9` for weighted
    /// cells. Spaces are significant; only blank lines around the maze are
    /// ignored.
    fn from_str(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .trim_matches(|c| c == '\n' || c == '\r')
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let width = lines.first().map_or(0, |line| line.chars().count());
        if width == 0 {
            return Err(Error::EmptyMaze);
        }

        let mut cells = Vec::with_capacity(width * lines.len());
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(Error::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            for (col, ch) in line.chars().enumerate() {
                let (cell, marker) = decode(ch, row, col)?;
                let here = Point::new(row, col);

                match marker {
                    Some(Marker::Start) => {
                        if let Some(first) = start {
                            return Err(Error::DuplicateStart {
                                first,
                                second: here,
                            });
                        }
                        start = Some(here);
                    }
                    Some(Marker::Goal) => {
                        if let Some(first) = goal {
                            return Err(Error::DuplicateGoal {
                                first,
                                second: here,
                            });
                        }
                        goal = Some(here);
                    }
                    None => {}
                }

                cells.push(cell);
            }
        }

        let start = start.ok_or(Error::MissingStart)?;
        let goal = goal.ok_or(Error::MissingGoal)?;

        Grid::new(cells, lines.len(), width, start, goal)
    }
}
