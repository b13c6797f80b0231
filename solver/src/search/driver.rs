use std::collections::HashSet;

use crate::maze::{Grid, Point};

use super::{
    frontier::Frontier,
    node::{NodeArena, NodeId, SearchNode},
    observer::SearchObserver,
    outcome::{SearchOutcome, SearchState},
    solution::Solution,
    strategy::Strategy,
};

/// One solve of one strategy over one grid.
///
/// Owns every node, the frontier, the explored set and the trace; nothing
/// outlives [`Search::run`] except the returned outcome.
pub struct Search<'g> {
    grid: &'g Grid,
    strategy: Strategy,
    arena: NodeArena,
    frontier: Box<dyn Frontier + Send>,
    root: NodeId,
    explored: Vec<Point>,
    explored_set: HashSet<Point>,
    trace: Vec<Point>,
    solution: Solution,
    state: SearchState,
}

impl<'g> Search<'g> {
    /// Seeds the frontier with the start node and records it in the trace.
    pub fn new(grid: &'g Grid, strategy: Strategy) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(SearchNode::root(grid.start()));
        let mut frontier = strategy.frontier();
        frontier.insert(root, arena.get(root));

        Self {
            grid,
            strategy,
            arena,
            frontier,
            root,
            explored: Vec::new(),
            explored_set: HashSet::new(),
            trace: vec![grid.start()],
            solution: Solution::default(),
            state: SearchState::Initialized,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn trace(&self) -> &[Point] {
        &self.trace
    }

    pub fn explored(&self) -> &[Point] {
        &self.explored
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Drives the search to a terminal state.
    pub fn run(mut self, observer: &mut dyn SearchObserver) -> SearchOutcome {
        while !self.step(observer).is_terminal() {}

        let outcome = self.into_outcome();
        match outcome.state {
            SearchState::Solved => observer.on_solved(&outcome),
            _ => observer.on_exhausted(&outcome),
        }
        outcome
    }

    /// Removes and handles one frontier node. Terminal states are sticky.
    pub fn step(&mut self, observer: &mut dyn SearchObserver) -> SearchState {
        match self.state {
            SearchState::Solved | SearchState::Exhausted => return self.state,
            SearchState::Initialized => {
                observer.on_start(self.strategy, self.grid.start(), self.grid.goal());
                self.state = SearchState::Running;
            }
            SearchState::Running => {}
        }

        let Some(current) = self.frontier.remove_next() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };

        let point = self.arena.get(current).point;
        // the root was traced when the search was seeded
        if current != self.root {
            self.trace.push(point);
        }
        observer.on_visit(point);
        self.mark_explored(point);

        if point == self.grid.goal() {
            self.solution = self.reconstruct(current);
            self.state = SearchState::Solved;
            return self.state;
        }

        if self.strategy.commits_to_first() {
            self.advance_depth_first(current, observer);
        } else {
            self.expand(current);
        }

        self.state
    }

    pub fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            strategy: self.strategy,
            state: self.state,
            solution: self.solution,
            explored: self.explored,
            trace: self.trace,
            open_cells: self.grid.open_cells(),
            nodes_created: self.arena.len(),
        }
    }

    fn mark_explored(&mut self, point: Point) {
        if self.explored_set.insert(point) {
            self.explored.push(point);
        }
    }

    fn is_insertable(&self, point: Point) -> bool {
        !self.explored_set.contains(&point) && !self.frontier.contains_cell(point)
    }

    fn push(&mut self, mut node: SearchNode) {
        node.priority = self
            .strategy
            .priority(node.cost, node.point, self.grid.goal());
        let id = self.arena.alloc(node);
        self.frontier.insert(id, self.arena.get(id));
    }

    /// Queues every insertable neighbor of `current`.
    fn expand(&mut self, current: NodeId) {
        for child in self.arena.neighbors_of(self.grid, current) {
            if self.explored_set.contains(&child.point) {
                continue;
            }

            if let Some(queued) = self.frontier.queued(child.point) {
                let cheaper = child.cost < self.arena.get(queued).cost;
                if !(self.strategy.requeues_cheaper() && cheaper) {
                    continue;
                }
            }

            self.push(child);
        }
    }

    /// Queues the first insertable neighbor of `id`, if there is one.
    fn push_first_insertable(&mut self, id: NodeId) -> bool {
        let next = self
            .arena
            .neighbors_of(self.grid, id)
            .into_iter()
            .find(|child| self.is_insertable(child.point));

        match next {
            Some(child) => {
                self.push(child);
                true
            }
            None => false,
        }
    }

    /// Commits to one new branch, walking back through the ancestors of
    /// `current` when it is a dead end. Running out of ancestors, root
    /// included, means the reachable maze has been fully explored.
    fn advance_depth_first(&mut self, current: NodeId, observer: &mut dyn SearchObserver) {
        if self.push_first_insertable(current) {
            return;
        }

        let mut ancestor = self.arena.get(current).parent;
        while let Some(id) = ancestor {
            let point = self.arena.get(id).point;
            self.trace.push(point);
            observer.on_backtrack(point);

            if self.push_first_insertable(id) {
                return;
            }
            ancestor = self.arena.get(id).parent;
        }

        if self.frontier.is_empty() {
            self.state = SearchState::Exhausted;
        }
    }

    /// Walks parent links from the goal node back to, but excluding, the
    /// root.
    fn reconstruct(&self, goal: NodeId) -> Solution {
        let mut actions = Vec::new();
        let mut path = Vec::new();

        for id in self.arena.ancestors(goal) {
            let node = self.arena.get(id);
            let Some(action) = node.action else {
                break;
            };
            actions.push(action);
            path.push(node.point);
        }

        actions.reverse();
        path.reverse();

        Solution {
            actions,
            path,
            cost: self.arena.get(goal).cost,
        }
    }
}

/// Runs `strategy` over `grid` to completion.
pub fn solve(grid: &Grid, strategy: Strategy, observer: &mut dyn SearchObserver) -> SearchOutcome {
    Search::new(grid, strategy).run(observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Action, Cell};

    #[derive(Default)]
    struct Recorder {
        visits: Vec<Point>,
        backtracks: Vec<Point>,
        finished: Option<SearchState>,
    }

    impl SearchObserver for Recorder {
        fn on_visit(&mut self, point: Point) {
            self.visits.push(point);
        }

        fn on_backtrack(&mut self, point: Point) {
            self.backtracks.push(point);
        }

        fn on_solved(&mut self, outcome: &SearchOutcome) {
            self.finished = Some(outcome.state);
        }

        fn on_exhausted(&mut self, outcome: &SearchOutcome) {
            self.finished = Some(outcome.state);
        }
    }

    #[test]
    fn breadth_first_scenario() {
        let grid = Grid::parse("A  \n # \n  B").unwrap();
        let outcome = solve(&grid, Strategy::BreadthFirst, &mut ());

        assert!(outcome.is_solved());
        assert_eq!(
            outcome.solution.actions,
            vec![Action::Right, Action::Right, Action::Down, Action::Down]
        );
        assert_eq!(outcome.solution.path.last(), Some(&grid.goal()));
        assert_eq!(outcome.explored.len(), 8);
        assert_eq!(outcome.coverage(), 1.0);
        assert_eq!(outcome.trace[0], grid.start());
        assert_eq!(outcome.trace.len(), 8);
    }

    #[test]
    fn stepping_moves_through_states() {
        let grid = Grid::parse("A B").unwrap();
        let mut search = Search::new(&grid, Strategy::BreadthFirst);
        assert_eq!(search.state(), SearchState::Initialized);
        assert_eq!(search.trace(), &[Point::new(0, 0)]);
        assert_eq!(search.frontier_len(), 1);

        assert_eq!(search.step(&mut ()), SearchState::Running);
        assert_eq!(search.explored(), &[Point::new(0, 0)]);
        assert_eq!(search.step(&mut ()), SearchState::Running);
        assert_eq!(search.step(&mut ()), SearchState::Solved);
        assert_eq!(search.step(&mut ()), SearchState::Solved);
        assert_eq!(search.trace().len(), 3);
    }

    #[test]
    fn depth_first_backtracks_through_ancestors() {
        // the first branch dead-ends at (0, 2); the walk back passes (0, 1)
        // and resumes downward from the root
        let grid = Grid::parse("A  \n ##\nB##").unwrap();
        let mut recorder = Recorder::default();
        let outcome = solve(&grid, Strategy::DepthFirst, &mut recorder);

        assert!(outcome.is_solved());
        assert_eq!(recorder.finished, Some(SearchState::Solved));
        assert_eq!(recorder.backtracks, vec![Point::new(0, 1), Point::new(0, 0)]);
        assert_eq!(
            recorder.visits,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(2, 0),
            ]
        );
        assert_eq!(
            outcome.trace,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(0, 1),
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
            ]
        );
        assert_eq!(outcome.solution.actions, vec![Action::Down, Action::Down]);
        assert_eq!(outcome.coverage(), 1.0);
    }

    #[test]
    fn depth_first_root_without_branches_exhausts() {
        let grid = Grid::parse("A#B").unwrap();
        let mut recorder = Recorder::default();
        let outcome = solve(&grid, Strategy::DepthFirst, &mut recorder);

        assert_eq!(outcome.state, SearchState::Exhausted);
        assert_eq!(recorder.finished, Some(SearchState::Exhausted));
        assert!(outcome.solution.is_empty());
        assert_eq!(outcome.trace, vec![grid.start()]);
        assert_eq!(outcome.explored, vec![grid.start()]);
    }

    #[test]
    fn start_equal_goal_is_solved_immediately() {
        let cells = vec![Cell::open(); 4];
        let grid = Grid::new(cells, 2, 2, Point::new(1, 1), Point::new(1, 1)).unwrap();

        for strategy in Strategy::all() {
            let outcome = solve(&grid, strategy, &mut ());
            assert!(outcome.is_solved());
            assert!(outcome.solution.is_empty());
            assert_eq!(outcome.trace, vec![Point::new(1, 1)]);
            assert_eq!(outcome.nodes_created, 1);
        }
    }

    #[test]
    fn dijkstra_prefers_cheap_detour() {
        let grid = Grid::parse("A9B\n   ").unwrap();
        let outcome = solve(&grid, Strategy::Dijkstra, &mut ());
        assert_eq!(outcome.solution.cost, 4);
        assert_eq!(
            outcome.solution.actions,
            vec![Action::Down, Action::Right, Action::Right, Action::Up]
        );

        let outcome = solve(&grid, Strategy::BreadthFirst, &mut ());
        assert_eq!(outcome.solution.cost, 10);
    }

    #[test]
    fn astar_requeues_cheaper_route() {
        // (1, 1) is first reached through the weighted (0, 1) at cost 3; the
        // route through (1, 2) reaches it for 2 and must replace it
        let grid = Grid::parse("32A\nB  ").unwrap();
        let outcome = solve(&grid, Strategy::AStar, &mut ());

        assert_eq!(outcome.solution.cost, 3);
        assert_eq!(
            outcome.solution.path,
            vec![Point::new(1, 2), Point::new(1, 1), Point::new(1, 0)]
        );
        assert_eq!(
            outcome.solution.actions,
            vec![Action::Down, Action::Left, Action::Left]
        );
    }
}
