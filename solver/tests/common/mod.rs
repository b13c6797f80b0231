#![allow(dead_code)]

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use maze_solver::{Cell, Grid, Point, SearchOutcome};
use rand::{Rng, rngs::StdRng};

pub const SCENARIO: &str = "A  \n # \n  B";
pub const CORRIDOR: &str = "A   B";

pub const UNIFORM_MAZES: &[&str] = &[
    SCENARIO,
    CORRIDOR,
    "A    \n ### \n   # \n## # \n    B",
    "#A#   \n   # #\n     B\n ##   ",
    "A        \n ####### \n       # \n###### # \nB        ",
    "   A   \n ##### \n #   # \n # B # \n ## ## \n       ",
];

pub const WEIGHTED_MAZES: &[&str] = &[
    "A9B\n   ",
    "32A\nB  ",
    "72A\nB2 ",
    "8A39#\n2224B",
    "A   9999   #\n ## 9999 # #\n #  2222 # #\n # ##### # #\n #   3   # #\n ### 3 ### #\n     3     B",
    "A5  B\n     ",
];

/// Exhaustive breadth-first step count from start to goal.
pub fn shortest_steps(grid: &Grid) -> Option<usize> {
    let mut dist: HashMap<Point, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(grid.start(), 0);
    queue.push_back(grid.start());

    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        for (next, _) in grid.neighbors(current) {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }

    dist.get(&grid.goal()).copied()
}

/// Reference minimum total traverse cost, start cell excluded.
pub fn min_cost(grid: &Grid) -> Option<u64> {
    let mut best: HashMap<Point, u64> = HashMap::new();
    let mut heap = BinaryHeap::new();
    best.insert(grid.start(), 0);
    heap.push(Reverse((0u64, grid.start())));

    while let Some(Reverse((cost, current))) = heap.pop() {
        if cost > best[&current] {
            continue;
        }
        for (next, _) in grid.neighbors(current) {
            let next_cost = cost + u64::from(grid.cost(next).unwrap_or(1));
            if best.get(&next).is_none_or(|&known| next_cost < known) {
                best.insert(next, next_cost);
                heap.push(Reverse((next_cost, next)));
            }
        }
    }

    best.get(&grid.goal()).copied()
}

/// Random maze with roughly `wall_ratio` walls and mixed costs.
pub fn random_grid(rng: &mut StdRng, height: usize, width: usize, wall_ratio: f64, weighted: bool) -> Grid {
    let mut cells: Vec<Cell> = (0..height * width)
        .map(|_| {
            if rng.random_bool(wall_ratio) {
                Cell::Wall
            } else if weighted {
                Cell::Open {
                    cost: rng.random_range(1..=9),
                }
            } else {
                Cell::open()
            }
        })
        .collect();

    let start_idx = rng.random_range(0..cells.len());
    let mut goal_idx = rng.random_range(0..cells.len());
    if cells.len() > 1 {
        while goal_idx == start_idx {
            goal_idx = rng.random_range(0..cells.len());
        }
    }
    cells[start_idx] = Cell::open();
    cells[goal_idx] = Cell::open();

    Grid::new(
        cells,
        height,
        width,
        Point::from_index(start_idx, width),
        Point::from_index(goal_idx, width),
    )
    .unwrap()
}

/// Asserts the solution is a simple, 4-connected, wall-free walk from the
/// start to the goal whose actions match its steps.
pub fn assert_valid_path(grid: &Grid, outcome: &SearchOutcome) {
    let solution = &outcome.solution;
    assert_eq!(solution.actions.len(), solution.path.len());

    if grid.start() == grid.goal() {
        assert!(solution.is_empty());
        return;
    }

    assert_eq!(solution.path.last(), Some(&grid.goal()));

    let mut seen = HashSet::new();
    let mut previous = grid.start();
    let mut cost = 0;
    for (action, point) in solution.steps() {
        assert!(grid.is_walkable(point), "{point} is a wall");
        assert!(previous.is_adjacent(point), "{previous} → {point} is not a step");
        assert_eq!(previous.step(action, grid.bounds()), Some(point));
        assert!(seen.insert(point), "{point} repeated");
        assert_ne!(point, grid.start());
        cost += u64::from(grid.cost(point).unwrap());
        previous = point;
    }
    assert_eq!(cost, solution.cost);
}
