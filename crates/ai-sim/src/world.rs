use std::collections::BTreeMap;

use ai_behaviors::{Door, DoorWorldMut, DoorWorldView, FollowWorldView};
use ai_core::{AgentKind, WorldMut, WorldView};
use ai_nav::{BlockGrid, BlockPos, DimensionId, NavWorldMut, NavWorldView, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimAgent {
    pub kind: AgentKind,
    pub position: Vec3,
    /// Blocks per tick at speed modifier 1.0.
    pub speed: f32,
    pub mounted: bool,
    pub panicking: bool,
}

/// One door state change, as observed by the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorTransition {
    pub tick: u64,
    pub agent: u64,
    pub door: BlockPos,
    pub open: bool,
}

/// Single-dimension block world: one floor grid, its doors, and the agents standing on it.
#[derive(Debug, Clone)]
pub struct SimWorld {
    dimension: DimensionId,
    grid: BlockGrid,
    doors: BTreeMap<BlockPos, Door>,
    agents: BTreeMap<u64, SimAgent>,
    transitions: Vec<DoorTransition>,
    tick: u64,
}

impl SimWorld {
    pub fn new(dimension: DimensionId, grid: BlockGrid) -> Self {
        Self {
            dimension,
            grid,
            doors: BTreeMap::new(),
            agents: BTreeMap::new(),
            transitions: Vec::new(),
            tick: 0,
        }
    }

    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    pub fn place_door(&mut self, pos: BlockPos, door: Door) {
        self.doors.insert(pos, door);
    }

    pub fn spawn(&mut self, id: u64, agent: SimAgent) {
        self.agents.insert(id, agent);
    }

    pub fn agent(&self, id: u64) -> Option<&SimAgent> {
        self.agents.get(&id)
    }

    pub fn doors(&self) -> impl Iterator<Item = (BlockPos, Door)> + '_ {
        self.doors.iter().map(|(pos, door)| (*pos, *door))
    }

    /// Every door state change so far, oldest first.
    pub fn transitions(&self) -> &[DoorTransition] {
        &self.transitions
    }

    /// Stamp subsequent door transitions with `tick`.
    pub fn begin_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    /// A closed door can't be walked into.
    pub fn blocks_entry(&self, pos: BlockPos) -> bool {
        self.doors.get(&pos).is_some_and(|door| !door.open)
    }
}

impl WorldView for SimWorld {
    type Agent = u64;

    fn agents(&self) -> Vec<u64> {
        self.agents.keys().copied().collect()
    }
}

impl WorldMut for SimWorld {}

impl NavWorldView for SimWorld {
    fn dimension(&self) -> DimensionId {
        self.dimension
    }

    fn position(&self, agent: u64) -> Option<Vec3> {
        self.agents.get(&agent).map(|a| a.position)
    }

    fn kind(&self, agent: u64) -> Option<AgentKind> {
        self.agents.get(&agent).map(|a| a.kind)
    }
}

impl NavWorldMut for SimWorld {
    fn set_position(&mut self, agent: u64, position: Vec3) {
        if let Some(a) = self.agents.get_mut(&agent) {
            a.position = position;
        }
    }
}

impl DoorWorldView for SimWorld {
    fn door(&self, pos: BlockPos) -> Option<Door> {
        self.doors.get(&pos).copied()
    }
}

impl DoorWorldMut for SimWorld {
    fn set_door_open(&mut self, agent: u64, pos: BlockPos, open: bool) {
        let Some(door) = self.doors.get_mut(&pos) else {
            return;
        };
        if door.open == open {
            return;
        }
        door.open = open;
        self.transitions.push(DoorTransition {
            tick: self.tick,
            agent,
            door: pos,
            open,
        });
    }
}

impl FollowWorldView for SimWorld {
    fn is_panicking(&self, agent: u64) -> bool {
        self.agents.get(&agent).is_some_and(|a| a.panicking)
    }

    fn is_mounted(&self, agent: u64) -> bool {
        self.agents.get(&agent).is_some_and(|a| a.mounted)
    }
}
