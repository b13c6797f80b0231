use crate::maze::Point;

use super::{solution::Solution, strategy::Strategy};

/// Driver states. `Solved` and `Exhausted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Running,
    Solved,
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Everything one finished solve hands to its consumers.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub strategy: Strategy,
    pub state: SearchState,
    pub solution: Solution,
    /// Expanded coordinates in expansion order.
    pub explored: Vec<Point>,
    /// Every coordinate made current, backtracking included.
    pub trace: Vec<Point>,
    pub open_cells: usize,
    pub nodes_created: usize,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        self.state == SearchState::Solved
    }

    /// Fraction of non-wall cells that were expanded.
    pub fn coverage(&self) -> f64 {
        if self.open_cells == 0 {
            return 0.0;
        }
        self.explored.len() as f64 / self.open_cells as f64
    }
}
