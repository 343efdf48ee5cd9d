//! Navigation primitives: block positions, paths, and grid pathfinding.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod grid;
pub mod math;
pub mod memory;
pub mod path;
pub mod world;

pub use grid::{BlockGrid, Pathfinder};
pub use math::{BlockPos, DimensionId, GlobalPos, Vec3};
pub use memory::{WalkTarget, PATH, WALK_TARGET};
pub use path::{Path, PathNode};
pub use world::{NavWorldMut, NavWorldView};
