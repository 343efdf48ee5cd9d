use std::collections::BTreeSet;

use ai_core::Blackboard;
use ai_nav::{BlockPos, GlobalPos};

use crate::memory::DOORS_TO_CLOSE;

/// The doors one agent has taken responsibility for closing.
///
/// The same door may be claimed by several agents at once; the release scan sorts that out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoorClaims {
    doors: BTreeSet<GlobalPos>,
}

impl DoorClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the door was already claimed.
    pub fn claim(&mut self, door: GlobalPos) -> bool {
        self.doors.insert(door)
    }

    pub fn release(&mut self, door: &GlobalPos) -> bool {
        self.doors.remove(door)
    }

    pub fn contains(&self, door: &GlobalPos) -> bool {
        self.doors.contains(door)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlobalPos> {
        self.doors.iter()
    }

    pub fn len(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    /// Record a claim in `blackboard`, creating the claim set on first use.
    pub fn remember(blackboard: &mut Blackboard, door: GlobalPos) -> bool {
        blackboard
            .get_or_insert_with(DOORS_TO_CLOSE, DoorClaims::new)
            .claim(door)
    }
}

impl FromIterator<GlobalPos> for DoorClaims {
    fn from_iter<I: IntoIterator<Item = GlobalPos>>(iter: I) -> Self {
        Self {
            doors: iter.into_iter().collect(),
        }
    }
}

/// Per-agent rescan debounce for the door task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoorScanState {
    /// The path node that was current at the last scan.
    pub node: Option<BlockPos>,
    pub cooldown: u32,
}
