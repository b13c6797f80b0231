//! Grid maze search under five interchangeable strategies, with enough trace
//! data to replay the search afterwards.

pub mod error;
pub mod maze;
pub mod render;
pub mod search;

pub use error::{Error, Result};
pub use maze::{Action, Cell, Grid, Point};
pub use search::{
    LogObserver, Search, SearchObserver, SearchOutcome, SearchState, Solution, Strategy, solve,
};
