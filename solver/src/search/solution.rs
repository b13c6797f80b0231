use std::fmt;

use crate::maze::{Action, Point};

/// Moves from just after the start through the goal.
///
/// Empty when start equals goal or when the goal was never reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub actions: Vec<Action>,
    pub path: Vec<Point>,
    /// Sum of the traverse costs of every cell in `path`.
    pub cost: u64,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn steps(&self) -> impl Iterator<Item = (Action, Point)> + '_ {
        self.actions.iter().copied().zip(self.path.iter().copied())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Start and goal are the same; no moves required.");
        }

        f.write_str("Start")?;
        for (action, point) in self.steps() {
            write!(f, ", move {action} to {point}")?;
        }
        f.write_str(", reach goal.")
    }
}
