use ai_brain::{Peers, Task};
use ai_core::{AgentId, Blackboard, MemoryState, Preconditions, TickContext};
use ai_nav::{BlockPos, GlobalPos, PATH};
use ai_tools::{emit as trace_emit, tags, TraceEvent};

use crate::doors::{close_doors_behind, DoorClaims, DoorScanState};
use crate::memory::{DOORS_TO_CLOSE, DOOR_SCAN};
use crate::{DoorConfig, DoorWorldMut};

/// Opens wooden doors at the agent's path edge and closes claimed doors it has left behind.
///
/// Scans fire immediately when the path's current node changes, are then suppressed for
/// `rescan_cooldown_ticks`, and fire every tick after that until the node changes again.
pub struct OpenDoorsTask {
    preconditions: Preconditions,
    config: DoorConfig,
}

impl OpenDoorsTask {
    pub fn new(config: DoorConfig) -> Self {
        Self {
            preconditions: Preconditions::new()
                .with(PATH, MemoryState::ValuePresent)
                .with(DOORS_TO_CLOSE, MemoryState::Registered),
            config,
        }
    }

    pub fn config(&self) -> &DoorConfig {
        &self.config
    }
}

impl Default for OpenDoorsTask {
    fn default() -> Self {
        Self::new(DoorConfig::default())
    }
}

impl<W> Task<W> for OpenDoorsTask
where
    W: DoorWorldMut + 'static,
{
    fn name(&self) -> &'static str {
        "open_doors"
    }

    fn preconditions(&self) -> &Preconditions {
        &self.preconditions
    }

    fn should_run(
        &self,
        _ctx: &TickContext,
        _agent: W::Agent,
        _world: &W,
        blackboard: &mut Blackboard,
        _peers: &Peers<'_, W::Agent>,
    ) -> bool {
        let Some(path) = blackboard.get(PATH) else {
            return false;
        };
        if path.is_start() || path.is_finished() {
            return false;
        }
        let current = path.current_node().map(|n| n.pos);

        let scan = blackboard.get_or_insert_with(DOOR_SCAN, DoorScanState::default);
        if scan.node != current {
            scan.cooldown = self.config.rescan_cooldown_ticks;
            return true;
        }
        scan.cooldown = scan.cooldown.saturating_sub(1);
        scan.cooldown == 0
    }

    fn run(
        &self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        peers: &Peers<'_, W::Agent>,
    ) {
        let Some(path) = blackboard.get(PATH) else {
            return;
        };
        let last = path.last_node().map(|n| n.pos);
        let current = path.current_node().map(|n| n.pos);
        blackboard
            .get_or_insert_with(DOOR_SCAN, DoorScanState::default)
            .node = current;

        if let Some(pos) = last {
            self.open_at(ctx, agent, world, blackboard, pos, true);
        }
        if let Some(pos) = current {
            self.open_at(ctx, agent, world, blackboard, pos, false);
        }

        close_doors_behind(ctx, agent, world, blackboard, peers, last, current, &self.config);
    }
}

impl OpenDoorsTask {
    fn open_at<W: DoorWorldMut>(
        &self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        pos: BlockPos,
        passed: bool,
    ) {
        let Some(door) = world.door(pos).filter(|d| d.is_interactable()) else {
            return;
        };
        let door_id = GlobalPos::new(world.dimension(), pos);

        if !door.open {
            world.set_door_open(agent, pos, true);
            tracing::debug!(agent = agent.stable_id(), door = %pos, "door opened");
            trace_emit(
                blackboard,
                TraceEvent::new(ctx.tick, tags::DOOR_OPEN)
                    .with_agent(agent.stable_id())
                    .with_subject(pos.as_packed()),
            );
            DoorClaims::remember(blackboard, door_id);
        } else if passed && self.config.claim_passed_open_doors {
            DoorClaims::remember(blackboard, door_id);
        }
    }
}
