use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::BbKey;

/// Untyped blackboard key, used where keys of different value types are mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemoryKey(pub u64);

/// Presence state of a blackboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MemoryState {
    /// Not declared and no value.
    Absent,
    /// Declared, no value yet.
    Registered,
    ValuePresent,
}

/// Required presence state per key. Fixed once a task is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preconditions {
    required: BTreeMap<MemoryKey, MemoryState>,
}

impl Preconditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<T: 'static>(mut self, key: BbKey<T>, state: MemoryState) -> Self {
        self.required.insert(key.erase(), state);
        self
    }

    pub fn required(&self, key: MemoryKey) -> Option<MemoryState> {
        self.required.get(&key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MemoryKey, MemoryState)> + '_ {
        self.required.iter().map(|(k, s)| (*k, *s))
    }

    /// Keys whose requirement is at least `Registered`; a scheduler declares these on agents it
    /// adopts so lazily-populated slots match from the first tick.
    pub fn declared_keys(&self) -> impl Iterator<Item = MemoryKey> + '_ {
        self.required
            .iter()
            .filter(|(_, state)| **state != MemoryState::Absent)
            .map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.required.len()
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }
}
