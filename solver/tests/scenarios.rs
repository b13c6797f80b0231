mod common;

use maze_solver::{Action, Cell, Grid, Point, SearchState, Strategy, solve};
use rstest::rstest;

use common::{CORRIDOR, SCENARIO};

#[test]
fn breadth_first_walks_around_the_wall() {
    let grid = Grid::parse(SCENARIO).unwrap();
    let outcome = solve(&grid, Strategy::BreadthFirst, &mut ());

    assert_eq!(outcome.state, SearchState::Solved);
    assert_eq!(
        outcome.solution.actions,
        vec![Action::Right, Action::Right, Action::Down, Action::Down]
    );
    assert_eq!(
        outcome.solution.path,
        vec![
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(2, 2)
        ]
    );
    assert_eq!(outcome.open_cells, 8);
    assert_eq!(outcome.coverage(), outcome.explored.len() as f64 / 8.0);
    assert_eq!(
        outcome.solution.to_string(),
        "Start, move right to (0, 1), move right to (0, 2), move down to (1, 2), move down to (2, 2), reach goal."
    );
}

#[rstest]
fn scenario_paths_have_four_steps(
    #[values(
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::Dijkstra,
        Strategy::GreedyBestFirst,
        Strategy::AStar
    )]
    strategy: Strategy,
) {
    let grid = Grid::parse(SCENARIO).unwrap();
    let outcome = solve(&grid, strategy, &mut ());

    assert!(outcome.is_solved());
    assert_eq!(outcome.solution.len(), 4);
    assert!(!outcome.solution.path.contains(&Point::new(1, 1)));
    common::assert_valid_path(&grid, &outcome);
}

#[test]
fn corridor_is_identical_for_every_strategy() {
    let grid = Grid::parse(CORRIDOR).unwrap();

    for strategy in Strategy::all() {
        let outcome = solve(&grid, strategy, &mut ());
        assert!(outcome.is_solved(), "{strategy}");
        assert_eq!(outcome.solution.actions, vec![Action::Right; 4], "{strategy}");
        assert_eq!(outcome.solution.cost, 4);
        assert_eq!(outcome.explored.len(), 5);
        assert_eq!(outcome.coverage(), 1.0, "{strategy}");
    }
}

#[test]
fn start_on_goal_needs_no_moves() {
    let grid = Grid::new(vec![Cell::open(); 9], 3, 3, Point::new(1, 1), Point::new(1, 1)).unwrap();

    for strategy in Strategy::all() {
        let outcome = solve(&grid, strategy, &mut ());
        assert_eq!(outcome.state, SearchState::Solved);
        assert!(outcome.solution.is_empty());
        assert!(outcome.solution.actions.is_empty());
        assert_eq!(outcome.trace, vec![Point::new(1, 1)]);
        assert_eq!(
            outcome.solution.to_string(),
            "Start and goal are the same; no moves required."
        );
    }
}

#[rstest]
#[case("A#B")]
#[case("A #\n###\n  B")]
#[case("A  #\n   #\n####\n  #B")]
#[case(include_str!("../../mazes/unsolvable.txt"))]
fn walled_off_goal_is_exhausted(
    #[case] text: &str,
    #[values(
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::Dijkstra,
        Strategy::GreedyBestFirst,
        Strategy::AStar
    )]
    strategy: Strategy,
) {
    let grid = Grid::parse(text).unwrap();
    let outcome = solve(&grid, strategy, &mut ());

    assert_eq!(outcome.state, SearchState::Exhausted);
    assert!(outcome.solution.is_empty());
    assert!(!outcome.explored.contains(&grid.goal()));
    assert!(outcome.coverage() < 1.0);
    assert_eq!(outcome.trace[0], grid.start());
}

#[test]
fn depth_first_returns_to_the_root_before_giving_up() {
    let grid = Grid::parse("A  #\n   #\n####\n  #B").unwrap();
    let outcome = solve(&grid, Strategy::DepthFirst, &mut ());

    assert_eq!(outcome.state, SearchState::Exhausted);
    assert_eq!(outcome.explored.len(), 6);
    assert_eq!(outcome.trace.last(), Some(&grid.start()));
}

#[test]
fn sample_mazes_load_and_solve() {
    let maze = Grid::parse(include_str!("../../mazes/maze.txt")).unwrap();
    let weighted = Grid::parse(include_str!("../../mazes/weighted.txt")).unwrap();

    for strategy in Strategy::all() {
        let outcome = solve(&maze, strategy, &mut ());
        assert!(outcome.is_solved());
        common::assert_valid_path(&maze, &outcome);

        let outcome = solve(&weighted, strategy, &mut ());
        assert!(outcome.is_solved());
        common::assert_valid_path(&weighted, &outcome);
    }

    assert_eq!(solve(&weighted, Strategy::Dijkstra, &mut ()).solution.cost, 19);
    assert_eq!(solve(&weighted, Strategy::BreadthFirst, &mut ()).solution.cost, 49);
}
