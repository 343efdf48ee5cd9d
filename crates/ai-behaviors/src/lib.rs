//! Concrete behavior tasks built on `ai-brain`.
//!
//! - [`OpenDoorsTask`]: opens wooden doors on the agent's path edge and closes the ones it
//!   claimed once nobody of its kind still needs them.
//! - [`FollowTask`]: walks toward a remembered follow target.
//! - [`NearestMobsSensor`]: maintains the nearby-agents list the door task consults.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod doors;
pub mod follow;
pub mod memory;
pub mod sensors;
pub mod world;

pub use config::{BehaviorConfig, DoorConfig, FollowConfig, MobsSensorConfig};
pub use doors::{
    close_doors_behind, AbandonReason, DoorClaims, DoorScanState, OpenDoorsTask, ReleaseReport,
};
pub use follow::FollowTask;
pub use memory::{follow_target, hurt_by_entity, mobs, DOORS_TO_CLOSE, DOOR_SCAN};
pub use sensors::NearestMobsSensor;
pub use world::{Door, DoorMaterial, DoorWorldMut, DoorWorldView, FollowWorldView};
