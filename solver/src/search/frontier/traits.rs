use crate::maze::Point;
use crate::search::node::{NodeId, SearchNode};

/// Discovered-but-unexpanded nodes, ordered by one strategy's policy.
///
/// A frontier holds at most one live node per cell. Membership is by
/// coordinate and never influences removal order.
pub trait Frontier {
    /// Adds `id`. If a node for the same cell is already queued it is
    /// superseded and will never be returned by [`Frontier::remove_next`].
    fn insert(&mut self, id: NodeId, node: &SearchNode);

    /// The live node queued for `point`, if any.
    fn queued(&self, point: Point) -> Option<NodeId>;

    fn contains_cell(&self, point: Point) -> bool {
        self.queued(point).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn remove_next(&mut self) -> Option<NodeId>;
}
