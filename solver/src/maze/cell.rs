/// One square of the maze.
///
/// A wall carries no cost; the cost of an open cell is paid on entering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open { cost: u32 },
}

impl Cell {
    pub const fn open() -> Self {
        Self::Open { cost: 1 }
    }

    pub fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    pub fn is_walkable(self) -> bool {
        !self.is_wall()
    }

    /// `None` for walls.
    pub fn cost(self) -> Option<u32> {
        match self {
            Self::Wall => None,
            Self::Open { cost } => Some(cost),
        }
    }
}
