mod fifo;
mod heap;
mod lifo;
pub mod traits;

pub use fifo::FifoFrontier;
pub use heap::HeapFrontier;
pub use lifo::LifoFrontier;
pub use traits::Frontier;
