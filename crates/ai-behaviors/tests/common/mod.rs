#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use ai_behaviors::{Door, DoorMaterial, DoorWorldMut, DoorWorldView, FollowWorldView};
use ai_core::{AgentKind, TickContext, WorldMut, WorldView};
use ai_nav::{BlockPos, DimensionId, NavWorldMut, NavWorldView, Vec3};

pub const VILLAGER: AgentKind = AgentKind(1);
pub const GOLEM: AgentKind = AgentKind(2);
pub const OVERWORLD: DimensionId = DimensionId(0);

#[derive(Debug, Default)]
pub struct TestWorld {
    pub dimension: DimensionId,
    pub positions: BTreeMap<u64, Vec3>,
    pub kinds: BTreeMap<u64, AgentKind>,
    pub doors: BTreeMap<BlockPos, Door>,
    pub panicking: BTreeSet<u64>,
    pub mounted: BTreeSet<u64>,
    /// Every door write: (agent, door, open).
    pub door_writes: Vec<(u64, BlockPos, bool)>,
}

impl TestWorld {
    pub fn spawn(&mut self, agent: u64, kind: AgentKind, at: Vec3) {
        self.positions.insert(agent, at);
        self.kinds.insert(agent, kind);
    }

    pub fn place_door(&mut self, pos: BlockPos, material: DoorMaterial, open: bool) {
        self.doors.insert(pos, Door::new(material, open));
    }

    pub fn is_open(&self, pos: BlockPos) -> bool {
        self.doors.get(&pos).is_some_and(|d| d.open)
    }

    pub fn closes_of(&self, pos: BlockPos) -> usize {
        self.door_writes
            .iter()
            .filter(|(_, p, open)| *p == pos && !*open)
            .count()
    }
}

impl WorldView for TestWorld {
    type Agent = u64;

    fn agents(&self) -> Vec<u64> {
        self.positions.keys().copied().collect()
    }
}

impl WorldMut for TestWorld {}

impl NavWorldView for TestWorld {
    fn dimension(&self) -> DimensionId {
        self.dimension
    }

    fn position(&self, agent: u64) -> Option<Vec3> {
        self.positions.get(&agent).copied()
    }

    fn kind(&self, agent: u64) -> Option<AgentKind> {
        self.kinds.get(&agent).copied()
    }
}

impl NavWorldMut for TestWorld {
    fn set_position(&mut self, agent: u64, position: Vec3) {
        self.positions.insert(agent, position);
    }
}

impl DoorWorldView for TestWorld {
    fn door(&self, pos: BlockPos) -> Option<Door> {
        self.doors.get(&pos).copied()
    }
}

impl DoorWorldMut for TestWorld {
    fn set_door_open(&mut self, agent: u64, pos: BlockPos, open: bool) {
        if let Some(door) = self.doors.get_mut(&pos) {
            door.open = open;
            self.door_writes.push((agent, pos, open));
        }
    }
}

impl FollowWorldView for TestWorld {
    fn is_panicking(&self, agent: u64) -> bool {
        self.panicking.contains(&agent)
    }

    fn is_mounted(&self, agent: u64) -> bool {
        self.mounted.contains(&agent)
    }
}

pub fn ctx(tick: u64) -> TickContext {
    TickContext::new(tick, 0.05)
}

/// Standing point on top of a block.
pub fn at(pos: BlockPos) -> Vec3 {
    pos.bottom_center()
}
