use ai_core::{AgentId, Blackboard, TickContext, WorldView};

/// Refreshes part of an agent's memory from the world before tasks are evaluated.
pub trait Sensor<W>: 'static
where
    W: WorldView + 'static,
{
    fn name(&self) -> &'static str;

    /// Scan period in ticks. Agents are staggered by their stable id.
    fn every_ticks(&self) -> u32 {
        1
    }

    fn sense(&self, ctx: &TickContext, agent: W::Agent, world: &W, blackboard: &mut Blackboard);
}

/// Whether a periodic job with period `every_ticks` is due for `agent` on `tick`.
///
/// The offset is derived from the agent's stable id so a population spreads its scans over the
/// period instead of all firing on the same tick.
pub fn is_due(agent: impl AgentId, tick: u64, every_ticks: u32) -> bool {
    let every = every_ticks.max(1) as u64;
    let offset = agent.stable_id() % every;
    ((tick + offset) % every) == 0
}
