#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning for [`OpenDoorsTask`](crate::OpenDoorsTask) and the release scan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DoorConfig {
    /// Ticks a rescan is suppressed after the path's current node changes.
    pub rescan_cooldown_ticks: u32,
    /// A claimed door farther than this from the agent is abandoned.
    pub reach_distance: f32,
    /// Radius around a door in which another agent can still be "using" it.
    pub pathing_distance: f32,
    /// Claim the door on the last node even when it was already open, so the agent that walks
    /// through a door someone else opened still closes it behind itself.
    pub claim_passed_open_doors: bool,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            rescan_cooldown_ticks: 20,
            reach_distance: 2.0,
            pathing_distance: 2.0,
            claim_passed_open_doors: true,
        }
    }
}

/// Tuning for [`FollowTask`](crate::FollowTask).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FollowConfig {
    pub walk_speed: f32,
    pub mounted_speed: f32,
    /// Stop walking once within this many blocks of the target.
    pub completion_range: u32,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            walk_speed: 0.8,
            mounted_speed: 1.7,
            completion_range: 3,
        }
    }
}

/// Tuning for [`NearestMobsSensor`](crate::NearestMobsSensor).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MobsSensorConfig {
    pub range: f32,
    pub every_ticks: u32,
}

impl Default for MobsSensorConfig {
    fn default() -> Self {
        Self {
            range: 16.0,
            every_ticks: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorConfig {
    pub doors: DoorConfig,
    pub follow: FollowConfig,
    pub mobs_sensor: MobsSensorConfig,
}
