use ai_core::BbKey;

use crate::{Path, Vec3};

/// The path the agent is currently following.
pub const PATH: BbKey<Path> = BbKey::new(0x4E41_5600_0000_0001);
/// Movement request written by behaviors and consumed by the host's locomotion.
pub const WALK_TARGET: BbKey<WalkTarget> = BbKey::new(0x4E41_5600_0000_0002);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkTarget {
    pub position: Vec3,
    pub speed: f32,
    /// Stop once within this many blocks of `position`.
    pub completion_range: u32,
}

impl WalkTarget {
    pub fn new(position: Vec3, speed: f32, completion_range: u32) -> Self {
        Self {
            position,
            speed,
            completion_range,
        }
    }

    pub fn is_reached_from(&self, position: Vec3) -> bool {
        position.distance(self.position) <= self.completion_range as f32
    }
}
