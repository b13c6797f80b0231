mod driver;
pub mod frontier;
mod node;
mod observer;
mod outcome;
mod queue;
mod solution;
mod strategy;

pub use driver::{Search, solve};
pub use node::{NodeArena, NodeId, SearchNode};
pub use observer::{LogObserver, SearchObserver};
pub use outcome::{SearchOutcome, SearchState};
pub use queue::PriorityQueue;
pub use solution::Solution;
pub use strategy::Strategy;
