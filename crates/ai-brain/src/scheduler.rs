use std::collections::{BTreeMap, BTreeSet};

use ai_core::{AgentId, Blackboard, MemoryKey, TickContext, WorldMut};
use ai_tools::{emit as trace_emit, tags, TraceEvent};

use crate::{is_due, Peers, SchedulerError, Sensor, Task};

/// Position of a task in the scheduler's registration order.
pub type TaskIndex = usize;

/// Drives sensors and tasks for a population of agents, one synchronous tick at a time.
pub struct TaskScheduler<W>
where
    W: WorldMut + 'static,
{
    tasks: Vec<Box<dyn Task<W>>>,
    sensors: Vec<Box<dyn Sensor<W>>>,
    blackboards: BTreeMap<W::Agent, Blackboard>,
    active: BTreeMap<W::Agent, Vec<bool>>,
}

impl<W> Default for TaskScheduler<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            sensors: Vec::new(),
            blackboards: BTreeMap::new(),
            active: BTreeMap::new(),
        }
    }
}

impl<W> TaskScheduler<W>
where
    W: WorldMut + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task(mut self, task: Box<dyn Task<W>>) -> Self {
        self.add_task(task);
        self
    }

    pub fn with_sensor(mut self, sensor: Box<dyn Sensor<W>>) -> Self {
        self.add_sensor(sensor);
        self
    }

    /// Register a task for every agent, current and future.
    ///
    /// Keys the task requires to be at least registered are declared on every known blackboard.
    pub fn add_task(&mut self, task: Box<dyn Task<W>>) -> TaskIndex {
        let declared: Vec<MemoryKey> = task.preconditions().declared_keys().collect();
        for blackboard in self.blackboards.values_mut() {
            declare(blackboard, &declared);
        }
        for active in self.active.values_mut() {
            active.push(false);
        }
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    pub fn add_sensor(&mut self, sensor: Box<dyn Sensor<W>>) {
        self.sensors.push(sensor);
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn add_agent(&mut self, agent: W::Agent) -> Result<(), SchedulerError> {
        self.add_agent_with(agent, Blackboard::new())
    }

    /// Adopt an agent with pre-populated memory.
    pub fn add_agent_with(
        &mut self,
        agent: W::Agent,
        mut blackboard: Blackboard,
    ) -> Result<(), SchedulerError> {
        if self.blackboards.contains_key(&agent) {
            return Err(SchedulerError::DuplicateAgent(agent.stable_id()));
        }
        for task in &self.tasks {
            let declared: Vec<MemoryKey> = task.preconditions().declared_keys().collect();
            declare(&mut blackboard, &declared);
        }
        self.blackboards.insert(agent, blackboard);
        self.active.insert(agent, vec![false; self.tasks.len()]);
        tracing::debug!(agent = agent.stable_id(), "agent registered with scheduler");
        Ok(())
    }

    /// Forget an agent. Active tasks are dropped without `finish`, as the agent is gone.
    pub fn remove_agent(&mut self, agent: W::Agent) -> Result<Blackboard, SchedulerError> {
        self.active.remove(&agent);
        let blackboard = self
            .blackboards
            .remove(&agent)
            .ok_or(SchedulerError::UnknownAgent(agent.stable_id()))?;
        tracing::debug!(agent = agent.stable_id(), "agent removed from scheduler");
        Ok(blackboard)
    }

    /// Match the registry to the world's population: adopt newcomers, drop departed agents.
    pub fn sync_agents(&mut self, world: &W) {
        let alive: BTreeSet<W::Agent> = world.agents().into_iter().collect();
        let departed: Vec<W::Agent> = self
            .blackboards
            .keys()
            .copied()
            .filter(|a| !alive.contains(a))
            .collect();
        for agent in departed {
            let _ = self.remove_agent(agent);
        }
        for agent in alive {
            if !self.blackboards.contains_key(&agent) {
                let _ = self.add_agent(agent);
            }
        }
    }

    pub fn contains_agent(&self, agent: W::Agent) -> bool {
        self.blackboards.contains_key(&agent)
    }

    pub fn agents(&self) -> impl Iterator<Item = W::Agent> + '_ {
        self.blackboards.keys().copied()
    }

    pub fn blackboard(&self, agent: W::Agent) -> Option<&Blackboard> {
        self.blackboards.get(&agent)
    }

    pub fn blackboard_mut(&mut self, agent: W::Agent) -> Option<&mut Blackboard> {
        self.blackboards.get_mut(&agent)
    }

    pub fn try_blackboard_mut(
        &mut self,
        agent: W::Agent,
    ) -> Result<&mut Blackboard, SchedulerError> {
        self.blackboards
            .get_mut(&agent)
            .ok_or(SchedulerError::UnknownAgent(agent.stable_id()))
    }

    pub fn is_active(&self, agent: W::Agent, task: TaskIndex) -> bool {
        self.active
            .get(&agent)
            .and_then(|a| a.get(task))
            .copied()
            .unwrap_or(false)
    }

    pub fn active_tasks(&self, agent: W::Agent) -> Vec<&'static str> {
        let Some(active) = self.active.get(&agent) else {
            return Vec::new();
        };
        self.tasks
            .iter()
            .zip(active.iter())
            .filter(|(_, on)| **on)
            .map(|(t, _)| t.name())
            .collect()
    }

    /// Tick every registered agent in stable id order.
    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) {
        let agents: Vec<W::Agent> = self.blackboards.keys().copied().collect();
        for agent in agents {
            self.tick_agent(ctx, agent, world);
        }
    }

    /// Tick a single agent: sensors, then the start pass, then the update pass.
    pub fn tick_agent(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let Some(mut blackboard) = self.blackboards.remove(&agent) else {
            return;
        };
        let task_count = self.tasks.len();
        let active = self
            .active
            .entry(agent)
            .or_insert_with(|| vec![false; task_count]);
        let peers = Peers::new(&self.blackboards);

        for sensor in &self.sensors {
            if is_due(agent, ctx.tick, sensor.every_ticks()) {
                sensor.sense(ctx, agent, &*world, &mut blackboard);
            }
        }

        for (index, task) in self.tasks.iter().enumerate() {
            if active[index] {
                continue;
            }
            if !blackboard.satisfies(task.preconditions()) {
                continue;
            }
            if !task.should_run(ctx, agent, &*world, &mut blackboard, &peers) {
                continue;
            }
            active[index] = true;
            tracing::trace!(
                tick = ctx.tick,
                agent = agent.stable_id(),
                task = task.name(),
                "task started"
            );
            trace_emit(
                &mut blackboard,
                TraceEvent::new(ctx.tick, tags::TASK_START)
                    .with_agent(agent.stable_id())
                    .with_subject(index as u64),
            );
            task.run(ctx, agent, world, &mut blackboard, &peers);
        }

        for (index, task) in self.tasks.iter().enumerate() {
            if !active[index] {
                continue;
            }
            let keep = blackboard.satisfies(task.preconditions())
                && task.should_keep_running(ctx, agent, &*world, &mut blackboard, &peers);
            if keep {
                task.keep_running(ctx, agent, world, &mut blackboard, &peers);
                continue;
            }
            active[index] = false;
            task.finish(ctx, agent, world, &mut blackboard, &peers);
            tracing::trace!(
                tick = ctx.tick,
                agent = agent.stable_id(),
                task = task.name(),
                "task stopped"
            );
            trace_emit(
                &mut blackboard,
                TraceEvent::new(ctx.tick, tags::TASK_STOP)
                    .with_agent(agent.stable_id())
                    .with_subject(index as u64),
            );
        }

        self.blackboards.insert(agent, blackboard);
    }
}

fn declare(blackboard: &mut Blackboard, keys: &[MemoryKey]) {
    for key in keys {
        blackboard.declare(*key);
    }
}
