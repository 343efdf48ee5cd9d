//! Trace events for the behavior scheduler.
//!
//! Events are plain data recorded into an agent's blackboard during simulation and inspected later
//! by tests and tooling. Every emitted event is also forwarded to `tracing` at `TRACE`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{emit, tags, TraceEvent, TraceLog, TraceSink, TRACE_LOG, TRACE_SINK};
