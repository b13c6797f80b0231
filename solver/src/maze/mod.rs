mod cell;
mod grid;
mod parse;
mod position;

pub use cell::Cell;
pub use grid::Grid;
pub use position::{Action, Point};
