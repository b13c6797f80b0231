use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use maze_solver::Strategy;

#[derive(Parser, Debug)]
#[command(name = "maze-solver")]
#[command(about = "Grid maze solver with five search strategies")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Maze file to solve ('A' start, 'B' goal, '#' wall, '2'-'9' weighted)
    #[arg(short, long, value_name = "FILE", default_value = "mazes/maze.txt")]
    pub maze: PathBuf,

    /// Delay between animation frames in milliseconds (0 = no delay)
    #[arg(short, long, default_value_t = 0)]
    pub delay: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve the maze with a single strategy
    Solve {
        /// bfs, dfs, dijkstra, gbfs or astar
        strategy: Strategy,

        /// Print the maze with explored cells and the solution path
        #[arg(short, long)]
        render: bool,
    },

    /// Replay a strategy's search frame by frame in the terminal
    Animate {
        /// bfs, dfs, dijkstra, gbfs or astar
        strategy: Strategy,
    },

    /// Solve with every strategy concurrently and compare them
    Benchmark,
}
