#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::VecDeque;

use ai_core::{BbKey, Blackboard};

/// Tags emitted by the scheduler and the built-in behaviors.
pub mod tags {
    /// Subject: task index.
    pub const TASK_START: &str = "task.start";
    /// Subject: task index.
    pub const TASK_STOP: &str = "task.stop";
    /// Subject: packed door position.
    pub const DOOR_OPEN: &str = "door.open";
    pub const DOOR_CLOSE: &str = "door.close";
    pub const DOOR_DEFER: &str = "door.defer";
    pub const DOOR_ABANDON: &str = "door.abandon";
    /// Subject: the agent that was being followed.
    pub const FOLLOW_ABORT: &str = "follow.abort";
}

/// One thing that happened to an agent during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub tag: Cow<'static, str>,
    /// Stable id of the agent the event belongs to.
    pub agent: u64,
    /// Tag-specific payload, see [`tags`].
    pub subject: u64,
}

impl TraceEvent {
    pub fn new(tick: u64, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tick,
            tag: tag.into(),
            agent: 0,
            subject: 0,
        }
    }

    pub fn with_agent(mut self, agent: u64) -> Self {
        self.agent = agent;
        self
    }

    pub fn with_subject(mut self, subject: u64) -> Self {
        self.subject = subject;
        self
    }
}

/// Receives every event emitted into a blackboard that holds it under [`TRACE_SINK`].
pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

/// Per-agent event history, oldest first.
///
/// A bounded log keeps only the most recent `limit` events, which is what long simulations want.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    events: VecDeque<TraceEvent>,
    #[cfg_attr(feature = "serde", serde(default))]
    limit: Option<usize>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounded(limit: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(limit.min(1024)),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn push(&mut self, event: TraceEvent) {
        if self.limit == Some(0) {
            return;
        }
        if self.limit.is_some_and(|limit| self.events.len() >= limit) {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> impl Iterator<Item = &TraceEvent> {
        self.events.iter()
    }

    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a TraceEvent> + 'a {
        self.events.iter().filter(move |e| e.tag == tag)
    }

    pub fn count(&self, tag: &str) -> usize {
        self.with_tag(tag).count()
    }

    /// Most recent event with `tag`.
    pub fn last(&self, tag: &str) -> Option<&TraceEvent> {
        self.events.iter().rev().find(|e| e.tag == tag)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Blackboard key for collecting events in-memory.
pub const TRACE_LOG: BbKey<TraceLog> = BbKey::new(0xA11D_7ACE_0000_0001);
/// Blackboard key for streaming events into a user-provided sink.
pub const TRACE_SINK: BbKey<Box<dyn TraceSink>> = BbKey::new(0xA11D_7ACE_0000_0002);

/// Record `event` into whatever the blackboard holds: a [`TraceLog`], a [`TraceSink`], both, or
/// neither. Always forwarded to `tracing` at `TRACE`.
pub fn emit(blackboard: &mut Blackboard, event: TraceEvent) {
    tracing::trace!(
        tick = event.tick,
        tag = %event.tag,
        agent = event.agent,
        subject = event.subject,
        "trace event"
    );
    if blackboard.contains(TRACE_SINK) {
        if let Some(log) = blackboard.get_mut(TRACE_LOG) {
            log.push(event.clone());
        }
        if let Some(sink) = blackboard.get_mut(TRACE_SINK) {
            sink.emit(event);
        }
    } else if let Some(log) = blackboard.get_mut(TRACE_LOG) {
        log.push(event);
    }
}
