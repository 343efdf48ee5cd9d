//! Tick driver: behaviors first, then locomotion.

use ai_behaviors::{
    follow_target, hurt_by_entity, Door, FollowTask, NearestMobsSensor, OpenDoorsTask,
};
use ai_brain::TaskScheduler;
use ai_core::{AgentKind, Blackboard, TickContext};
use ai_nav::{BlockPos, DimensionId, NavWorldMut, Pathfinder, Vec3, PATH, WALK_TARGET};
use ai_tools::{TraceLog, TRACE_LOG};

use crate::scenario::{block, plan_route, Scenario, ScenarioError};
use crate::world::{DoorTransition, SimAgent, SimWorld};

/// A path node counts as reached once the walker is this close to its standing point.
pub const NODE_REACHED_DISTANCE: f32 = 0.5;

/// Trace events kept per agent.
const TRACE_LIMIT: usize = 512;

pub struct Simulation {
    world: SimWorld,
    scheduler: TaskScheduler<SimWorld>,
    /// Context of the next tick to simulate.
    ctx: TickContext,
}

/// Outcome of [`Simulation::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    /// Ticks simulated so far.
    pub ticks: u64,
    pub transitions: Vec<DoorTransition>,
    /// Final state of every door.
    pub doors: Vec<(BlockPos, Door)>,
}

impl SimReport {
    pub fn opens_of(&self, door: BlockPos) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.door == door && t.open)
            .count()
    }

    pub fn closes_of(&self, door: BlockPos) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.door == door && !t.open)
            .count()
    }

    pub fn open_doors(&self) -> Vec<BlockPos> {
        self.doors
            .iter()
            .filter(|(_, door)| door.open)
            .map(|(pos, _)| *pos)
            .collect()
    }
}

impl Simulation {
    pub fn new(scenario: &Scenario) -> Result<Self, ScenarioError> {
        scenario.validate()?;

        let mut world = SimWorld::new(DimensionId(scenario.dimension), scenario.build_grid()?);
        for door in &scenario.doors {
            world.place_door(block(door.at), Door::new(door.material, door.open));
        }

        let config = scenario.behavior;
        let mut scheduler = TaskScheduler::<SimWorld>::new()
            .with_sensor(Box::new(NearestMobsSensor::new(config.mobs_sensor)))
            .with_task(Box::new(OpenDoorsTask::new(config.doors)))
            .with_task(Box::new(FollowTask::<SimWorld>::new(config.follow)));

        for spec in &scenario.agents {
            world.spawn(
                spec.id,
                SimAgent {
                    kind: AgentKind(spec.kind),
                    position: block(spec.start).bottom_center(),
                    speed: spec.speed,
                    mounted: spec.mounted,
                    panicking: spec.panicking,
                },
            );

            let mut blackboard = Blackboard::new();
            blackboard.set(TRACE_LOG, TraceLog::bounded(TRACE_LIMIT));
            if let Some(path) = plan_route(world.grid(), spec)? {
                blackboard.set(PATH, path);
            }
            if let Some(target) = spec.follow {
                blackboard.set(follow_target::<u64>(), target);
            }
            if let Some(attacker) = spec.hurt_by {
                blackboard.set(hurt_by_entity::<u64>(), attacker);
            }
            scheduler
                .add_agent_with(spec.id, blackboard)
                .map_err(|_| ScenarioError::DuplicateAgent(spec.id))?;
        }

        tracing::info!(
            scenario = scenario.name.as_deref().unwrap_or("unnamed"),
            agents = scenario.agents.len(),
            doors = scenario.doors.len(),
            "simulation ready"
        );

        Ok(Self {
            world,
            scheduler,
            ctx: TickContext::new(0, scenario.dt_seconds),
        })
    }

    pub fn world(&self) -> &SimWorld {
        &self.world
    }

    pub fn scheduler(&self) -> &TaskScheduler<SimWorld> {
        &self.scheduler
    }

    /// The next tick to be simulated.
    pub fn tick(&self) -> u64 {
        self.ctx.tick
    }

    /// An agent's memory, for scripting between steps.
    pub fn blackboard_mut(&mut self, agent: u64) -> Option<&mut Blackboard> {
        self.scheduler.blackboard_mut(agent)
    }

    /// Simulate one tick and return the door transitions it caused.
    pub fn step(&mut self) -> &[DoorTransition] {
        let before = self.world.transitions().len();
        self.world.begin_tick(self.ctx.tick);

        self.scheduler.tick(&self.ctx, &mut self.world);

        let agents: Vec<u64> = self.scheduler.agents().collect();
        for agent in agents {
            if let Some(blackboard) = self.scheduler.blackboard_mut(agent) {
                locomote(&mut self.world, agent, blackboard);
            }
        }

        self.ctx = self.ctx.next();
        &self.world.transitions()[before..]
    }

    pub fn run(&mut self, ticks: u64) -> SimReport {
        for _ in 0..ticks {
            for t in self.step() {
                tracing::info!(
                    tick = t.tick,
                    agent = t.agent,
                    door = %t.door,
                    open = t.open,
                    "door transition"
                );
            }
        }
        self.report()
    }

    pub fn report(&self) -> SimReport {
        SimReport {
            ticks: self.ctx.tick,
            transitions: self.world.transitions().to_vec(),
            doors: self.world.doors().collect(),
        }
    }
}

/// Move one agent along its path, re-routing first when it has a walk target elsewhere.
///
/// A reached walk target is forgotten; the agent then rests for the tick.
fn locomote(world: &mut SimWorld, agent: u64, blackboard: &mut Blackboard) {
    let Some(walker) = world.agent(agent).copied() else {
        return;
    };
    let walk = blackboard.get(WALK_TARGET).copied();
    if walk.is_some_and(|w| w.is_reached_from(walker.position)) {
        blackboard.forget(WALK_TARGET);
        return;
    }
    if let Some(walk) = walk {
        steer(world, agent, walker.position, walk.position, blackboard);
    }

    let Some(path) = blackboard.get_mut(PATH) else {
        return;
    };
    let Some(node) = path.current_node().map(|n| n.pos) else {
        return;
    };
    if world.blocks_entry(node) && BlockPos::containing(walker.position) != node {
        return;
    }

    let target = node.bottom_center();
    let step = walker.speed * walk.map_or(1.0, |w| w.speed);
    let position = walker.position.move_towards(target, step);
    if position.distance(target) <= NODE_REACHED_DISTANCE {
        path.advance();
    }
    world.set_position(agent, position);
}

/// Replace the path when it no longer leads to the block containing `goal`.
fn steer(world: &SimWorld, agent: u64, from: Vec3, goal: Vec3, blackboard: &mut Blackboard) {
    let goal = BlockPos::containing(goal);
    let heading = blackboard
        .get(PATH)
        .filter(|p| !p.is_finished())
        .and_then(|p| p.target())
        .map(|n| n.pos);
    if heading == Some(goal) {
        return;
    }
    let Some(mut path) = world.grid().find_path(BlockPos::containing(from), goal) else {
        return;
    };
    // The walker already stands on the first node.
    path.set_next_index(1);
    tracing::trace!(agent, goal = %goal, nodes = path.len(), "re-routed toward walk target");
    blackboard.set(PATH, path);
}
