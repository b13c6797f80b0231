use crate::maze::Point;

use super::{outcome::SearchOutcome, strategy::Strategy};

/// Receives progress events from one solve.
///
/// Passed explicitly into the driver; all hooks default to doing nothing and
/// `()` is the silent observer.
pub trait SearchObserver {
    fn on_start(&mut self, _strategy: Strategy, _start: Point, _goal: Point) {}

    /// A node was removed from the frontier and became current.
    fn on_visit(&mut self, _point: Point) {}

    /// Depth-first walked back to an ancestor looking for a new branch.
    fn on_backtrack(&mut self, _point: Point) {}

    fn on_solved(&mut self, _outcome: &SearchOutcome) {}

    fn on_exhausted(&mut self, _outcome: &SearchOutcome) {}
}

impl SearchObserver for () {}

/// Forwards search events to the `log` facade.
pub struct LogObserver {
    label: &'static str,
    visits: usize,
}

impl LogObserver {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            label: strategy.name(),
            visits: 0,
        }
    }
}

impl SearchObserver for LogObserver {
    fn on_start(&mut self, _strategy: Strategy, start: Point, goal: Point) {
        log::debug!("[{}] searching {} → {}", self.label, start, goal);
    }

    fn on_visit(&mut self, point: Point) {
        self.visits += 1;
        log::trace!("[{}] visit #{} at {}", self.label, self.visits, point);
    }

    fn on_backtrack(&mut self, point: Point) {
        log::trace!("[{}] backtracking to {}", self.label, point);
    }

    fn on_solved(&mut self, outcome: &SearchOutcome) {
        log::debug!(
            "[{}] goal reached: {} steps, cost {}, {} nodes",
            self.label,
            outcome.solution.len(),
            outcome.solution.cost,
            outcome.nodes_created
        );
    }

    fn on_exhausted(&mut self, outcome: &SearchOutcome) {
        log::warn!(
            "[{}] maze exhausted after exploring {} cells, goal unreachable",
            self.label,
            outcome.explored.len()
        );
    }
}
