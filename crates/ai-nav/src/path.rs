use crate::BlockPos;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single traversal node. Two nodes are equal when they sit on the same block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathNode {
    pub pos: BlockPos,
}

impl PathNode {
    pub const fn new(pos: BlockPos) -> Self {
        Self { pos }
    }
}

/// An ordered node sequence plus the index of the next node to reach.
///
/// - `current_node()` is the node the agent is walking toward (`nodes[next]`).
/// - `last_node()` is the most recently reached node (`nodes[next - 1]`), `None` at the start.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    nodes: Vec<PathNode>,
    next: usize,
}

impl Path {
    pub fn new(nodes: Vec<PathNode>) -> Self {
        Self { nodes, next: 0 }
    }

    pub fn from_positions(positions: impl IntoIterator<Item = BlockPos>) -> Self {
        Self::new(positions.into_iter().map(PathNode::new).collect())
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn next_index(&self) -> usize {
        self.next
    }

    pub fn set_next_index(&mut self, next: usize) {
        self.next = next.min(self.nodes.len());
    }

    /// Nothing reached yet.
    pub fn is_start(&self) -> bool {
        self.next == 0
    }

    /// Every node reached.
    pub fn is_finished(&self) -> bool {
        self.next >= self.nodes.len()
    }

    pub fn current_node(&self) -> Option<&PathNode> {
        self.nodes.get(self.next)
    }

    pub fn last_node(&self) -> Option<&PathNode> {
        self.next.checked_sub(1).and_then(|i| self.nodes.get(i))
    }

    /// Final destination.
    pub fn target(&self) -> Option<&PathNode> {
        self.nodes.last()
    }

    /// Mark the current node as reached.
    pub fn advance(&mut self) {
        if self.next < self.nodes.len() {
            self.next += 1;
        }
    }
}
