use std::fmt;

/// The move taken to step from one cell to an adjacent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Expansion order shared by every strategy. Ties in the frontier fall
    /// back to this order, so changing it changes the explored cells.
    pub const EXPANSION_ORDER: [Action; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (row, column) coordinate in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// `bounds` is `(height, width)`.
    pub fn step(self, action: Action, bounds: (usize, usize)) -> Option<Self> {
        let (height, width) = bounds;
        match action {
            Action::Up if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            Action::Down if self.row + 1 < height => Some(Self::new(self.row + 1, self.col)),
            Action::Left if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            Action::Right if self.col + 1 < width => Some(Self::new(self.row, self.col + 1)),
            _ => None,
        }
    }

    /// In-bounds neighbors in [`Action::EXPANSION_ORDER`].
    pub fn neighbors(self, bounds: (usize, usize)) -> Vec<(Self, Action)> {
        Action::EXPANSION_ORDER
            .into_iter()
            .filter_map(|action| self.step(action, bounds).map(|pos| (pos, action)))
            .collect()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
