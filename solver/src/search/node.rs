use crate::maze::{Action, Grid, Point};

/// Stable handle to a node stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One step of a hypothetical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub point: Point,
    /// `None` only for the root.
    pub action: Option<Action>,
    /// Sum of the traverse costs entered since the start.
    pub cost: u64,
    /// Frontier ordering key, meaning depends on the strategy.
    pub priority: u64,
    pub parent: Option<NodeId>,
}

impl SearchNode {
    pub fn root(point: Point) -> Self {
        Self {
            point,
            action: None,
            cost: 0,
            priority: 0,
            parent: None,
        }
    }
}

/// Owns every node created during one solve. Parent links are indices into
/// the arena, so backtracking never outlives it.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walkable neighbors of `id` as unallocated children, in expansion
    /// order. `cost` already includes the neighbor's traverse cost; the
    /// priority is left for the strategy to fill in.
    pub fn neighbors_of(&self, grid: &Grid, id: NodeId) -> Vec<SearchNode> {
        let node = self.get(id);
        grid.neighbors(node.point)
            .into_iter()
            .map(|(point, action)| SearchNode {
                point,
                action: Some(action),
                cost: node.cost + u64::from(grid.cost(point).unwrap_or(1)),
                priority: 0,
                parent: Some(id),
            })
            .collect()
    }

    /// Iterates from `id` up to the root, `id` first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), |&current| self.get(current).parent)
    }
}
