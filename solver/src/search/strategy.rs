use std::fmt;
use std::str::FromStr;

use super::frontier::{FifoFrontier, Frontier, HeapFrontier, LifoFrontier};
use crate::error::Error;
use crate::maze::Point;

/// The five interchangeable search policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    Dijkstra,
    GreedyBestFirst,
    AStar,
}

impl Strategy {
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::DepthFirst,
            Self::BreadthFirst,
            Self::Dijkstra,
            Self::GreedyBestFirst,
            Self::AStar,
        ]
        .into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::GreedyBestFirst => "GBFS",
            Self::AStar => "A*",
        }
    }

    /// Short identifier accepted by [`FromStr`].
    pub fn id(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::GreedyBestFirst => "gbfs",
            Self::AStar => "astar",
        }
    }

    pub fn frontier(&self) -> Box<dyn Frontier + Send> {
        match self {
            Self::BreadthFirst => Box::new(FifoFrontier::new()),
            Self::DepthFirst => Box::new(LifoFrontier::new()),
            Self::Dijkstra | Self::GreedyBestFirst | Self::AStar => Box::new(HeapFrontier::new()),
        }
    }

    /// Priority of a newly discovered node at `point` whose accumulated path
    /// cost (its own traverse cost included) is `cost`.
    pub fn priority(&self, cost: u64, point: Point, goal: Point) -> u64 {
        match self {
            Self::BreadthFirst | Self::DepthFirst => 0,
            Self::Dijkstra => cost,
            Self::GreedyBestFirst => point.manhattan_distance(goal) as u64,
            // truncated on purpose; floor keeps the heuristic consistent
            Self::AStar => cost + point.euclidean_distance(goal).floor() as u64,
        }
    }

    /// Depth-first commits to the first insertable neighbor and backtracks
    /// through ancestors on a dead end.
    pub fn commits_to_first(&self) -> bool {
        matches!(self, Self::DepthFirst)
    }

    /// Whether a queued cell is re-queued when a strictly cheaper route to it
    /// turns up.
    pub fn requeues_cheaper(&self) -> bool {
        matches!(self, Self::AStar)
    }

    /// Whether the strategy always returns a minimum-cost path.
    pub fn is_cost_optimal(&self) -> bool {
        matches!(self, Self::Dijkstra | Self::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "dijkstra" => Ok(Self::Dijkstra),
            "gbfs" | "greedy-best-first" => Ok(Self::GreedyBestFirst),
            "astar" | "a-star" | "a*" => Ok(Self::AStar),
            _ => Err(Error::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
