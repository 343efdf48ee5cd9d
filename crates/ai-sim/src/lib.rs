//! Headless block-world simulation for the behavior scheduler.
//!
//! A [`Scenario`] (YAML) describes a floor grid, doors, and agents with waypoints or a follow
//! target. [`Simulation`] builds a [`SimWorld`] from it, registers the built-in behaviors, and
//! steps scheduler ticks followed by locomotion.

#![forbid(unsafe_code)]

pub mod scenario;
pub mod sim;
pub mod world;

pub use scenario::{AgentSpec, DoorSpec, GridSpec, Scenario, ScenarioError, MAX_GRID_CELLS};
pub use sim::{SimReport, Simulation, NODE_REACHED_DISTANCE};
pub use world::{DoorTransition, SimAgent, SimWorld};
