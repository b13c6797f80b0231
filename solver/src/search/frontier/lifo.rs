use std::collections::HashMap;

use super::traits::Frontier;
use crate::maze::Point;
use crate::search::node::{NodeId, SearchNode};

/// Stack frontier for depth-first search.
#[derive(Default)]
pub struct LifoFrontier {
    stack: Vec<(NodeId, Point)>,
    index: HashMap<Point, NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn insert(&mut self, id: NodeId, node: &SearchNode) {
        self.index.insert(node.point, id);
        self.stack.push((id, node.point));
    }

    fn queued(&self, point: Point) -> Option<NodeId> {
        self.index.get(&point).copied()
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn remove_next(&mut self) -> Option<NodeId> {
        while let Some((id, point)) = self.stack.pop() {
            if self.index.get(&point) == Some(&id) {
                self.index.remove(&point);
                return Some(id);
            }
        }
        None
    }
}
