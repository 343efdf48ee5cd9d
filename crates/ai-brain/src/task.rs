use ai_core::{Blackboard, Preconditions, TickContext, WorldMut};

use crate::Peers;

/// A unit of conditional behavior with declared memory preconditions.
///
/// Per (task, agent) the scheduler keeps a two-state machine:
///
/// - INACTIVE → ACTIVE when the preconditions match and [`should_run`](Task::should_run) is
///   true; [`run`](Task::run) is called once.
/// - ACTIVE → ACTIVE while the preconditions match and
///   [`should_keep_running`](Task::should_keep_running) is true;
///   [`keep_running`](Task::keep_running) is called every such tick.
/// - ACTIVE → INACTIVE otherwise; [`finish`](Task::finish) is called.
///
/// A task that keeps the default `should_keep_running` is one-shot: it is started and stopped in
/// the same tick, so `should_run` is evaluated again on the next one.
pub trait Task<W>: 'static
where
    W: WorldMut + 'static,
{
    fn name(&self) -> &'static str;

    fn preconditions(&self) -> &Preconditions;

    fn should_run(
        &self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &W,
        blackboard: &mut Blackboard,
        peers: &Peers<'_, W::Agent>,
    ) -> bool;

    fn run(
        &self,
        _ctx: &TickContext,
        _agent: W::Agent,
        _world: &mut W,
        _blackboard: &mut Blackboard,
        _peers: &Peers<'_, W::Agent>,
    ) {
    }

    fn should_keep_running(
        &self,
        _ctx: &TickContext,
        _agent: W::Agent,
        _world: &W,
        _blackboard: &mut Blackboard,
        _peers: &Peers<'_, W::Agent>,
    ) -> bool {
        false
    }

    fn keep_running(
        &self,
        _ctx: &TickContext,
        _agent: W::Agent,
        _world: &mut W,
        _blackboard: &mut Blackboard,
        _peers: &Peers<'_, W::Agent>,
    ) {
    }

    fn finish(
        &self,
        _ctx: &TickContext,
        _agent: W::Agent,
        _world: &mut W,
        _blackboard: &mut Blackboard,
        _peers: &Peers<'_, W::Agent>,
    ) {
    }
}
