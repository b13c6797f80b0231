use std::collections::HashMap;

use super::traits::Frontier;
use crate::maze::Point;
use crate::search::{
    node::{NodeId, SearchNode},
    queue::PriorityQueue,
};

/// Min-priority frontier shared by Dijkstra, greedy best-first and A*.
///
/// Superseded entries stay in the heap and are dropped when they surface.
#[derive(Default)]
pub struct HeapFrontier {
    heap: PriorityQueue<(NodeId, Point)>,
    index: HashMap<Point, NodeId>,
}

impl HeapFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for HeapFrontier {
    fn insert(&mut self, id: NodeId, node: &SearchNode) {
        self.index.insert(node.point, id);
        self.heap.push(node.priority, (id, node.point));
    }

    fn queued(&self, point: Point) -> Option<NodeId> {
        self.index.get(&point).copied()
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn remove_next(&mut self) -> Option<NodeId> {
        while let Some((_, (id, point))) = self.heap.pop() {
            if self.index.get(&point) == Some(&id) {
                self.index.remove(&point);
                return Some(id);
            }
        }
        None
    }
}
