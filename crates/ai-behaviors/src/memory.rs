//! Blackboard keys owned by the built-in behaviors.
//!
//! Keys whose value is an agent id are generic over the agent type; the id is the same for every
//! agent type, so a blackboard only ever holds one of them.

use ai_core::{AgentId, BbKey};

use crate::doors::{DoorClaims, DoorScanState};

/// Doors this agent opened and must close again.
pub const DOORS_TO_CLOSE: BbKey<DoorClaims> = BbKey::new(0xD008_0000_0000_0001);
/// Rescan debounce for [`OpenDoorsTask`](crate::OpenDoorsTask).
pub const DOOR_SCAN: BbKey<DoorScanState> = BbKey::new(0xD008_0000_0000_0002);

const MOBS_ID: u64 = 0xD008_0000_0000_0010;
const HURT_BY_ENTITY_ID: u64 = 0xD008_0000_0000_0011;
const FOLLOW_TARGET_ID: u64 = 0xD008_0000_0000_0012;

/// Nearby agents, nearest first. Maintained by [`NearestMobsSensor`](crate::NearestMobsSensor).
pub const fn mobs<A: AgentId>() -> BbKey<Vec<A>> {
    BbKey::new(MOBS_ID)
}

/// The agent that last hurt this one.
pub const fn hurt_by_entity<A: AgentId>() -> BbKey<A> {
    BbKey::new(HURT_BY_ENTITY_ID)
}

/// The agent this one is following.
pub const fn follow_target<A: AgentId>() -> BbKey<A> {
    BbKey::new(FOLLOW_TARGET_ID)
}
