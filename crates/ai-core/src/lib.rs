//! Deterministic, engine-agnostic agent memory and world primitives.
//!
//! Everything here is single-threaded and tick-driven: agents own a [`Blackboard`], the host
//! simulation implements [`WorldView`] / [`WorldMut`], and schedulers built on top (see
//! `ai-brain`) gate behavior on the presence state of blackboard keys.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod blackboard;
pub mod memory;
pub mod tick;
pub mod world;

pub use agent::{AgentId, AgentKind};
pub use blackboard::{BbKey, Blackboard};
pub use memory::{MemoryKey, MemoryState, Preconditions};
pub use tick::TickContext;
pub use world::{WorldMut, WorldView};
