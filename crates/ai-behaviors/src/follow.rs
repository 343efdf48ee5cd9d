use std::marker::PhantomData;

use ai_brain::{Peers, Task};
use ai_core::{AgentId, Blackboard, MemoryState, Preconditions, TickContext, WorldMut};
use ai_nav::{WalkTarget, WALK_TARGET};
use ai_tools::{emit as trace_emit, tags, TraceEvent};

use crate::memory::{follow_target, hurt_by_entity};
use crate::{FollowConfig, FollowWorldView};

/// Walks toward the agent stored under [`follow_target`], until that key is cleared.
///
/// A panicking agent that was hurt by the very agent it follows stops following it.
pub struct FollowTask<W> {
    preconditions: Preconditions,
    config: FollowConfig,
    _world: PhantomData<fn() -> W>,
}

impl<W> FollowTask<W>
where
    W: WorldMut + FollowWorldView + 'static,
{
    pub fn new(config: FollowConfig) -> Self {
        Self {
            preconditions: Preconditions::new()
                .with(follow_target::<W::Agent>(), MemoryState::ValuePresent),
            config,
            _world: PhantomData,
        }
    }
}

impl<W> Default for FollowTask<W>
where
    W: WorldMut + FollowWorldView + 'static,
{
    fn default() -> Self {
        Self::new(FollowConfig::default())
    }
}

impl<W> Task<W> for FollowTask<W>
where
    W: WorldMut + FollowWorldView + 'static,
{
    fn name(&self) -> &'static str {
        "follow"
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
        blackboard.contains(follow_target::<W::Agent>())
    }

    fn should_keep_running(
        &self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &W,
        blackboard: &mut Blackboard,
        peers: &Peers<'_, W::Agent>,
    ) -> bool {
        self.should_run(ctx, agent, world, blackboard, peers)
    }

    fn keep_running(
        &self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        _peers: &Peers<'_, W::Agent>,
    ) {
        let Some(target) = blackboard.get(follow_target::<W::Agent>()).copied() else {
            return;
        };

        let hurt_by_target = blackboard.get(hurt_by_entity::<W::Agent>()) == Some(&target);
        if world.is_panicking(agent) && hurt_by_target {
            blackboard.forget(follow_target::<W::Agent>());
            tracing::debug!(
                agent = agent.stable_id(),
                target = target.stable_id(),
                "stopped following an attacker"
            );
            trace_emit(
                blackboard,
                TraceEvent::new(ctx.tick, tags::FOLLOW_ABORT)
                    .with_agent(agent.stable_id())
                    .with_subject(target.stable_id()),
            );
            return;
        }

        let Some(position) = world.position(target) else {
            return;
        };
        let speed = if world.is_mounted(agent) {
            self.config.mounted_speed
        } else {
            self.config.walk_speed
        };
        blackboard.set(
            WALK_TARGET,
            WalkTarget::new(position, speed, self.config.completion_range),
        );
    }
}
