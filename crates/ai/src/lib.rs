//! Umbrella crate that re-exports the `ai-*` building blocks.
//!
//! - [`core`]: typed blackboard keys, presence preconditions, world traits.
//! - [`nav`]: block positions, paths, grid pathfinding.
//! - [`brain`]: the per-agent task scheduler and sensors.
//! - [`behaviors`]: door coordination, following, nearby-agent sensing.
//! - [`tools`]: trace events recorded into blackboards.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use ai_tools as tools;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use ai_nav as nav;

#[cfg(feature = "brain")]
#[cfg_attr(docsrs, doc(cfg(feature = "brain")))]
pub use ai_brain as brain;

#[cfg(feature = "behaviors")]
#[cfg_attr(docsrs, doc(cfg(feature = "behaviors")))]
pub use ai_behaviors as behaviors;
