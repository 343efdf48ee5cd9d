//! Scenario loading and validation.

use std::collections::BTreeSet;
use std::path::Path as FsPath;

use ai_behaviors::{BehaviorConfig, DoorMaterial};
use ai_nav::{BlockGrid, BlockPos, Path, Pathfinder};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Block coordinates as written in scenario files: `[x, y, z]`.
pub type Coords = [i32; 3];

pub(crate) fn block(coords: Coords) -> BlockPos {
    BlockPos::new(coords[0], coords[1], coords[2])
}

/// A simulation scenario, loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,

    /// Ticks to run when the command line does not override it.
    #[serde(default = "default_ticks")]
    pub ticks: u64,

    #[serde(default = "default_dt")]
    pub dt_seconds: f32,

    #[serde(default)]
    pub dimension: u32,

    /// Overrides for the built-in behaviors.
    #[serde(default)]
    pub behavior: BehaviorConfig,

    pub grid: GridSpec,

    #[serde(default)]
    pub doors: Vec<DoorSpec>,

    #[serde(default)]
    pub agents: Vec<AgentSpec>,
}

fn default_ticks() -> u64 {
    200
}
fn default_dt() -> f32 {
    0.05
}

/// The walkable floor layer.
#[derive(Debug, Clone, Deserialize)]
pub struct GridSpec {
    pub origin: Coords,
    pub width: u32,
    pub depth: u32,
    #[serde(default)]
    pub walls: Vec<Coords>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoorSpec {
    pub at: Coords,
    #[serde(default = "default_material")]
    pub material: DoorMaterial,
    #[serde(default)]
    pub open: bool,
}

fn default_material() -> DoorMaterial {
    DoorMaterial::Wood
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentSpec {
    pub id: u64,
    #[serde(default)]
    pub kind: u32,
    pub start: Coords,
    /// Visited in order; the route between them is planned on the grid.
    #[serde(default)]
    pub waypoints: Vec<Coords>,
    #[serde(default)]
    pub follow: Option<u64>,
    #[serde(default)]
    pub hurt_by: Option<u64>,
    #[serde(default)]
    pub mounted: bool,
    #[serde(default)]
    pub panicking: bool,
    /// Blocks walked per tick at speed modifier 1.0.
    #[serde(default = "default_speed")]
    pub speed: f32,
}

fn default_speed() -> f32 {
    0.25
}

/// Largest floor layer a scenario may declare, in cells.
pub const MAX_GRID_CELLS: u32 = 1 << 20;

/// Semantic problems in a scenario that parsed fine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    #[error("grid must be at least 1x1")]
    EmptyGrid,

    #[error("grid {width}x{depth} is too large or does not fit in block coordinates")]
    GridTooLarge { width: u32, depth: u32 },

    #[error("agent {0} is declared more than once")]
    DuplicateAgent(u64),

    #[error("agent {agent}: {pos} is outside the grid or blocked")]
    BlockedCell { agent: u64, pos: BlockPos },

    #[error("door at {0} is outside the grid or inside a wall")]
    MisplacedDoor(BlockPos),

    #[error("door at {0} is declared more than once")]
    DuplicateDoor(BlockPos),

    #[error("agent {agent} refers to unknown agent {target}")]
    UnknownAgent { agent: u64, target: u64 },

    #[error("agent {agent} cannot follow itself")]
    SelfFollow { agent: u64 },

    #[error("agent {agent}: no route from {from} to {to}")]
    NoRoute {
        agent: u64,
        from: BlockPos,
        to: BlockPos,
    },

    #[error("agent {agent}: speed must be positive, got {speed}")]
    BadSpeed { agent: u64, speed: f32 },
}

impl Scenario {
    /// Load a scenario from a YAML file.
    pub fn load(path: &FsPath) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario from {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse scenario from {}", path.display()))
    }

    pub fn parse(yaml: &str) -> Result<Self> {
        let scenario: Self = serde_yaml::from_str(yaml)?;
        Ok(scenario)
    }

    /// The floor grid with walls applied. Doors stay walkable.
    pub fn build_grid(&self) -> Result<BlockGrid, ScenarioError> {
        if self.grid.width == 0 || self.grid.depth == 0 {
            return Err(ScenarioError::EmptyGrid);
        }
        let (width, depth) = (self.grid.width, self.grid.depth);
        let too_large = ScenarioError::GridTooLarge { width, depth };
        if width.checked_mul(depth).map_or(true, |cells| cells > MAX_GRID_CELLS) {
            return Err(too_large);
        }
        let mut grid = BlockGrid::new(block(self.grid.origin), width, depth).ok_or(too_large)?;
        for wall in &self.grid.walls {
            grid.set_blocked(block(*wall), true);
        }
        Ok(grid)
    }

    /// Check everything that can go wrong after parsing, including that every route exists.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let grid = self.build_grid()?;

        let mut doors = BTreeSet::new();
        for door in &self.doors {
            let pos = block(door.at);
            if !walkable(&grid, pos) {
                return Err(ScenarioError::MisplacedDoor(pos));
            }
            if !doors.insert(pos) {
                return Err(ScenarioError::DuplicateDoor(pos));
            }
        }

        let mut ids = BTreeSet::new();
        for agent in &self.agents {
            if !ids.insert(agent.id) {
                return Err(ScenarioError::DuplicateAgent(agent.id));
            }
        }

        for agent in &self.agents {
            if agent.speed.is_nan() || agent.speed <= 0.0 {
                return Err(ScenarioError::BadSpeed {
                    agent: agent.id,
                    speed: agent.speed,
                });
            }
            for target in agent.follow.iter().chain(agent.hurt_by.iter()) {
                if !ids.contains(target) {
                    return Err(ScenarioError::UnknownAgent {
                        agent: agent.id,
                        target: *target,
                    });
                }
            }
            if agent.follow == Some(agent.id) {
                return Err(ScenarioError::SelfFollow { agent: agent.id });
            }
            plan_route(&grid, agent)?;
        }
        Ok(())
    }
}

fn walkable(grid: &BlockGrid, pos: BlockPos) -> bool {
    pos.y == grid.origin().y && !grid.is_blocked(pos)
}

/// Plan the agent's route through its waypoints. `None` when it has no waypoints.
pub(crate) fn plan_route(
    grid: &BlockGrid,
    agent: &AgentSpec,
) -> Result<Option<Path>, ScenarioError> {
    let start = block(agent.start);
    for pos in std::iter::once(start).chain(agent.waypoints.iter().copied().map(block)) {
        if !walkable(grid, pos) {
            return Err(ScenarioError::BlockedCell {
                agent: agent.id,
                pos,
            });
        }
    }
    if agent.waypoints.is_empty() {
        return Ok(None);
    }

    let mut route: Vec<BlockPos> = vec![start];
    let mut from = start;
    for to in agent.waypoints.iter().copied().map(block) {
        let leg = grid.find_path(from, to).ok_or(ScenarioError::NoRoute {
            agent: agent.id,
            from,
            to,
        })?;
        // Each leg starts where the previous one ended.
        route.extend(leg.nodes().iter().skip(1).map(|n| n.pos));
        from = to;
    }
    Ok(Some(Path::from_positions(route)))
}
