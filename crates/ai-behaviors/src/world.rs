use ai_core::WorldMut;
use ai_nav::{BlockPos, NavWorldView};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DoorMaterial {
    Wood,
    Iron,
}

/// A door block as seen by behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    pub material: DoorMaterial,
    pub open: bool,
}

impl Door {
    pub const fn new(material: DoorMaterial, open: bool) -> Self {
        Self { material, open }
    }

    /// Only wooden doors can be operated by hand.
    pub fn is_interactable(&self) -> bool {
        self.material == DoorMaterial::Wood
    }
}

pub trait DoorWorldView: NavWorldView {
    /// The door at `pos`, or `None` when the block is not a door.
    fn door(&self, pos: BlockPos) -> Option<Door>;
}

pub trait DoorWorldMut: WorldMut + DoorWorldView {
    /// Direct world write; no-op when `pos` is not a door.
    fn set_door_open(&mut self, agent: Self::Agent, pos: BlockPos, open: bool);
}

pub trait FollowWorldView: NavWorldView {
    fn is_panicking(&self, agent: Self::Agent) -> bool;
    fn is_mounted(&self, agent: Self::Agent) -> bool;
}
