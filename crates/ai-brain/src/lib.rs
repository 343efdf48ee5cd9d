//! Blackboard-gated behavior task scheduler built on `ai-core`.
//!
//! A [`TaskScheduler`] owns one [`Blackboard`](ai_core::Blackboard) per agent plus a shared list
//! of [`Task`]s and [`Sensor`]s. Every tick, for every agent in stable order, it:
//!
//! 1. runs due sensors (memory refresh),
//! 2. starts inactive tasks whose preconditions match and whose `should_run` agrees,
//! 3. continues or stops active tasks.
//!
//! Task instances are shared by all agents, so any per-agent scratch state belongs in the
//! agent's blackboard.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod peers;
pub mod scheduler;
pub mod sensor;
pub mod task;

pub use error::SchedulerError;
pub use peers::Peers;
pub use scheduler::{TaskIndex, TaskScheduler};
pub use sensor::{is_due, Sensor};
pub use task::Task;
