//! Floor-layer pathfinding over block positions.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::{BlockPos, Path, PathNode};

/// Turns a start/goal pair into a block path.
pub trait Pathfinder {
    fn find_path(&self, start: BlockPos, goal: BlockPos) -> Option<Path>;
}

/// Horizontal steps tried from every block, in this order: north, east, south, west.
const STEPS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// A single walkable floor layer of blocks at height `origin.y`.
///
/// The layer spans `origin` to its far corner inclusive. Walls are the only obstacles; doors are
/// ordinary floor here, since whether one is open is a runtime concern of the walker.
#[derive(Debug, Clone)]
pub struct BlockGrid {
    origin: BlockPos,
    corner: BlockPos,
    walls: BTreeSet<BlockPos>,
}

impl BlockGrid {
    /// `None` when the layer is empty or its far edge does not fit in block coordinates.
    pub fn new(origin: BlockPos, width: u32, depth: u32) -> Option<Self> {
        if width == 0 || depth == 0 {
            return None;
        }
        let dx = i32::try_from(width - 1).ok()?;
        let dz = i32::try_from(depth - 1).ok()?;
        let corner = BlockPos::new(
            origin.x.checked_add(dx)?,
            origin.y,
            origin.z.checked_add(dz)?,
        );
        Some(Self {
            origin,
            corner,
            walls: BTreeSet::new(),
        })
    }

    pub fn origin(&self) -> BlockPos {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.corner.x.abs_diff(self.origin.x) + 1
    }

    pub fn depth(&self) -> u32 {
        self.corner.z.abs_diff(self.origin.z) + 1
    }

    /// Whether `pos` lies on this layer, walled or not.
    pub fn contains(&self, pos: BlockPos) -> bool {
        pos.y == self.origin.y
            && (self.origin.x..=self.corner.x).contains(&pos.x)
            && (self.origin.z..=self.corner.z).contains(&pos.z)
    }

    /// Positions off the layer are ignored.
    pub fn set_blocked(&mut self, pos: BlockPos, blocked: bool) {
        if !self.contains(pos) {
            return;
        }
        if blocked {
            self.walls.insert(pos);
        } else {
            self.walls.remove(&pos);
        }
    }

    /// Walls and everything off the layer.
    pub fn is_blocked(&self, pos: BlockPos) -> bool {
        !self.contains(pos) || self.walls.contains(&pos)
    }

    fn open_neighbors(&self, pos: BlockPos) -> impl Iterator<Item = BlockPos> + '_ {
        STEPS
            .into_iter()
            .filter_map(move |(dx, dz)| {
                Some(BlockPos::new(
                    pos.x.checked_add(dx)?,
                    pos.y,
                    pos.z.checked_add(dz)?,
                ))
            })
            .filter(move |next| !self.is_blocked(*next))
    }
}

fn manhattan(a: BlockPos, b: BlockPos) -> u32 {
    a.x.abs_diff(b.x).saturating_add(a.z.abs_diff(b.z))
}

fn walk_back(came_from: &BTreeMap<BlockPos, BlockPos>, goal: BlockPos) -> Path {
    let mut nodes = vec![PathNode::new(goal)];
    let mut at = goal;
    while let Some(&prev) = came_from.get(&at) {
        nodes.push(PathNode::new(prev));
        at = prev;
    }
    nodes.reverse();
    Path::new(nodes)
}

impl Pathfinder for BlockGrid {
    /// A* over the layer. The returned path starts on `start` (so it is at its start until the
    /// walker reaches its own block) and ends on `goal`.
    fn find_path(&self, start: BlockPos, goal: BlockPos) -> Option<Path> {
        if self.is_blocked(start) || self.is_blocked(goal) {
            return None;
        }

        // Min-heap on (estimate, cost so far, push order); push order keeps ties deterministic.
        let mut frontier = BinaryHeap::new();
        let mut best: BTreeMap<BlockPos, u32> = BTreeMap::from([(start, 0)]);
        let mut came_from: BTreeMap<BlockPos, BlockPos> = BTreeMap::new();
        let mut pushed: u64 = 0;
        frontier.push(Reverse((manhattan(start, goal), 0u32, pushed, start)));

        while let Some(Reverse((_, cost, _, pos))) = frontier.pop() {
            if pos == goal {
                return Some(walk_back(&came_from, goal));
            }
            if best.get(&pos).is_some_and(|&known| cost > known) {
                continue;
            }

            let step = cost.saturating_add(1);
            for next in self.open_neighbors(pos) {
                if best.get(&next).is_some_and(|&known| known <= step) {
                    continue;
                }
                best.insert(next, step);
                came_from.insert(next, pos);
                pushed += 1;
                frontier.push(Reverse((
                    step.saturating_add(manhattan(next, goal)),
                    step,
                    pushed,
                    next,
                )));
            }
        }

        None
    }
}
