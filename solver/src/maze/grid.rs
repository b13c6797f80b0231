use std::fmt;

use super::{
    cell::Cell,
    position::{Action, Point},
};
use crate::error::{Error, Result};

/// A rectangular, read-only maze with one start and one goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Builds a grid from row-major cells, rejecting anything a solve could
    /// trip over later.
    pub fn new(
        cells: Vec<Cell>,
        height: usize,
        width: usize,
        start: Point,
        goal: Point,
    ) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::EmptyMaze);
        }

        if cells.len() != height * width {
            return Err(Error::DimensionMismatch {
                height,
                width,
                expected: height * width,
                found: cells.len(),
            });
        }

        if let Some(idx) = cells.iter().position(|&cell| cell.cost() == Some(0)) {
            return Err(Error::ZeroCost {
                point: Point::from_index(idx, width),
            });
        }

        let grid = Self {
            cells,
            width,
            height,
            start,
            goal,
        };

        for (role, point) in [("start", start), ("goal", goal)] {
            match grid.cell(point) {
                None => return Err(Error::EndpointOutOfBounds { role, point }),
                Some(Cell::Wall) => return Err(Error::EndpointIsWall { role, point }),
                Some(Cell::Open { .. }) => {}
            }
        }

        Ok(grid)
    }

    /// Parses the textual maze encoding, see [`std::str::FromStr`].
    pub fn parse(text: &str) -> Result<Self> {
        text.parse()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`
    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn cell(&self, pos: Point) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.to_index(self.width)])
        } else {
            None
        }
    }

    pub fn is_walkable(&self, pos: Point) -> bool {
        self.cell(pos).is_some_and(|cell| cell.is_walkable())
    }

    /// Traverse cost of an open cell, `None` for walls and out-of-bounds.
    pub fn cost(&self, pos: Point) -> Option<u32> {
        self.cell(pos).and_then(Cell::cost)
    }

    /// Number of non-wall cells.
    pub fn open_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_walkable()).count()
    }

    /// Walkable neighbors of `pos` in [`Action::EXPANSION_ORDER`].
    pub fn neighbors(&self, pos: Point) -> Vec<(Point, Action)> {
        pos.neighbors(self.bounds())
            .into_iter()
            .filter(|(p, _)| self.is_walkable(*p))
            .collect()
    }

    /// Row-major iteration over every cell with its coordinate.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (Point::from_index(idx, self.width), cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                let pos = Point::new(row, col);
                let ch = if pos == self.start {
                    'A'
                } else if pos == self.goal {
                    'B'
                } else {
                    match self.cells[pos.to_index(self.width)] {
                        Cell::Wall => '#',
                        Cell::Open { cost: 1 } => ' ',
                        Cell::Open { cost } => char::from_digit(cost, 10).unwrap_or('?'),
                    }
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
