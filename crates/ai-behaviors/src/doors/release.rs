use ai_brain::Peers;
use ai_core::{AgentId, Blackboard, TickContext};
use ai_nav::{BlockPos, GlobalPos, NavWorldView, PATH};
use ai_tools::{emit as trace_emit, tags, TraceEvent};

use crate::memory::{mobs, DOORS_TO_CLOSE};
use crate::{DoorConfig, DoorWorldMut};

/// Why a claim was dropped without touching the door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbandonReason {
    /// Other dimension, too far away, or the agent has no position.
    Unreachable,
    /// The block is no longer an interactable door.
    NotADoor,
    AlreadyClosed,
}

/// What one release scan did with each claim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseReport {
    /// Claims left in place because the agent is still on them.
    pub kept: Vec<BlockPos>,
    pub closed: Vec<BlockPos>,
    /// Claims handed over to another agent of the same kind; the door stays open.
    pub deferred: Vec<BlockPos>,
    pub abandoned: Vec<(BlockPos, AbandonReason)>,
}

impl ReleaseReport {
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
            && self.closed.is_empty()
            && self.deferred.is_empty()
            && self.abandoned.is_empty()
    }
}

enum Verdict {
    Keep,
    Abandon(AbandonReason),
    Defer,
    Close,
}

/// Walk the agent's claim set and release every claim that is no longer needed.
///
/// `last` and `current` are the agent's own path endpoints; claims on them are kept. Every other
/// claim is consumed: abandoned if unreachable/gone/already closed, handed over if another agent
/// of the same kind near the door still has it as a path endpoint, and closed otherwise.
#[allow(clippy::too_many_arguments)]
pub fn close_doors_behind<W>(
    ctx: &TickContext,
    agent: W::Agent,
    world: &mut W,
    blackboard: &mut Blackboard,
    peers: &Peers<'_, W::Agent>,
    last: Option<BlockPos>,
    current: Option<BlockPos>,
    config: &DoorConfig,
) -> ReleaseReport
where
    W: DoorWorldMut,
{
    let mut report = ReleaseReport::default();
    let Some(mut claims) = blackboard.remove(DOORS_TO_CLOSE) else {
        return report;
    };

    let snapshot: Vec<GlobalPos> = claims.iter().copied().collect();
    for door in snapshot {
        let verdict = judge(agent, &*world, blackboard, peers, door, last, current, config);
        match verdict {
            Verdict::Keep => {
                report.kept.push(door.pos);
                continue;
            }
            Verdict::Abandon(reason) => {
                tracing::trace!(
                    agent = agent.stable_id(),
                    door = %door.pos,
                    ?reason,
                    "door claim abandoned"
                );
                report.abandoned.push((door.pos, reason));
            }
            Verdict::Defer => {
                tracing::debug!(
                    agent = agent.stable_id(),
                    door = %door.pos,
                    "door left open for another agent"
                );
                report.deferred.push(door.pos);
            }
            Verdict::Close => {
                world.set_door_open(agent, door.pos, false);
                tracing::debug!(agent = agent.stable_id(), door = %door.pos, "door closed");
                report.closed.push(door.pos);
            }
        }
        claims.release(&door);
    }

    blackboard.set(DOORS_TO_CLOSE, claims);
    emit_report(ctx, agent, blackboard, &report);
    report
}

#[allow(clippy::too_many_arguments)]
fn judge<W>(
    agent: W::Agent,
    world: &W,
    blackboard: &Blackboard,
    peers: &Peers<'_, W::Agent>,
    door: GlobalPos,
    last: Option<BlockPos>,
    current: Option<BlockPos>,
    config: &DoorConfig,
) -> Verdict
where
    W: DoorWorldMut,
{
    if last == Some(door.pos) || current == Some(door.pos) {
        return Verdict::Keep;
    }
    if cannot_reach_door(agent, world, door, config.reach_distance) {
        return Verdict::Abandon(AbandonReason::Unreachable);
    }
    let Some(state) = world.door(door.pos).filter(|d| d.is_interactable()) else {
        return Verdict::Abandon(AbandonReason::NotADoor);
    };
    if !state.open {
        return Verdict::Abandon(AbandonReason::AlreadyClosed);
    }
    if has_other_agent_reached_door(agent, world, blackboard, peers, door.pos, config) {
        return Verdict::Defer;
    }
    Verdict::Close
}

fn cannot_reach_door<W: NavWorldView>(
    agent: W::Agent,
    world: &W,
    door: GlobalPos,
    reach_distance: f32,
) -> bool {
    if door.dimension != world.dimension() {
        return true;
    }
    match world.position(agent) {
        Some(pos) => !door.pos.is_within_distance(pos, reach_distance),
        None => true,
    }
}

/// Is another agent of the same kind, close to the door, about to walk through it or just did?
fn has_other_agent_reached_door<W: NavWorldView>(
    agent: W::Agent,
    world: &W,
    blackboard: &Blackboard,
    peers: &Peers<'_, W::Agent>,
    door: BlockPos,
    config: &DoorConfig,
) -> bool {
    let Some(nearby) = blackboard.get(mobs::<W::Agent>()) else {
        return false;
    };
    let Some(kind) = world.kind(agent) else {
        return false;
    };
    nearby
        .iter()
        .copied()
        .filter(|other| *other != agent)
        .filter(|other| world.kind(*other) == Some(kind))
        .filter(|other| {
            world
                .position(*other)
                .is_some_and(|p| door.is_within_distance(p, config.pathing_distance))
        })
        .any(|other| has_reached(peers.get(other), door))
}

fn has_reached(blackboard: Option<&Blackboard>, door: BlockPos) -> bool {
    let Some(path) = blackboard.and_then(|bb| bb.get(PATH)) else {
        return false;
    };
    if path.is_finished() {
        return false;
    }
    let Some(last) = path.last_node() else {
        return false;
    };
    last.pos == door || path.current_node().is_some_and(|n| n.pos == door)
}

fn emit_report<A: AgentId>(
    ctx: &TickContext,
    agent: A,
    blackboard: &mut Blackboard,
    report: &ReleaseReport,
) {
    let events = report
        .closed
        .iter()
        .map(|pos| (tags::DOOR_CLOSE, *pos))
        .chain(report.deferred.iter().map(|pos| (tags::DOOR_DEFER, *pos)))
        .chain(report.abandoned.iter().map(|(pos, _)| (tags::DOOR_ABANDON, *pos)));
    for (tag, pos) in events {
        trace_emit(
            blackboard,
            TraceEvent::new(ctx.tick, tag)
                .with_agent(agent.stable_id())
                .with_subject(pos.as_packed()),
        );
    }
}
