use std::collections::{HashMap, VecDeque};

use super::traits::Frontier;
use crate::maze::Point;
use crate::search::node::{NodeId, SearchNode};

/// Queue frontier for breadth-first search.
#[derive(Default)]
pub struct FifoFrontier {
    queue: VecDeque<(NodeId, Point)>,
    index: HashMap<Point, NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn insert(&mut self, id: NodeId, node: &SearchNode) {
        self.index.insert(node.point, id);
        self.queue.push_back((id, node.point));
    }

    fn queued(&self, point: Point) -> Option<NodeId> {
        self.index.get(&point).copied()
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn remove_next(&mut self) -> Option<NodeId> {
        while let Some((id, point)) = self.queue.pop_front() {
            if self.index.get(&point) == Some(&id) {
                self.index.remove(&point);
                return Some(id);
            }
        }
        None
    }
}
