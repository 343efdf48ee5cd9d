use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;

use crate::memory::{MemoryKey, MemoryState, Preconditions};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BbKey<T: 'static> {
    id: u64,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> Copy for BbKey<T> {}

impl<T: 'static> Clone for BbKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> BbKey<T> {
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    pub fn id(self) -> u64 {
        self.id
    }

    /// The untyped key, as used by precondition maps.
    pub const fn erase(self) -> MemoryKey {
        MemoryKey(self.id)
    }
}

impl<T: 'static> From<BbKey<T>> for MemoryKey {
    fn from(key: BbKey<T>) -> Self {
        key.erase()
    }
}

/// Per-agent memory.
///
/// A key is in one of three presence states (see [`MemoryState`]): absent, registered (declared
/// but empty), or holding a value. Writing a value registers the key; `forget` clears the value
/// and keeps the registration so tasks that only need the slot declared keep matching.
#[derive(Default)]
pub struct Blackboard {
    values: BTreeMap<u64, Box<dyn Any>>,
    registered: BTreeSet<u64>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A blackboard with every key in `keys` declared up front.
    pub fn with_registered(keys: impl IntoIterator<Item = MemoryKey>) -> Self {
        let mut bb = Self::new();
        for key in keys {
            bb.registered.insert(key.0);
        }
        bb
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.registered.clear();
    }

    /// Declare `key` without giving it a value.
    pub fn register<T: 'static>(&mut self, key: BbKey<T>) {
        self.declare(key.erase());
    }

    /// Untyped [`register`](Self::register), for keys taken from precondition maps.
    pub fn declare(&mut self, key: MemoryKey) {
        self.registered.insert(key.0);
    }

    /// `true` when the key holds a value.
    pub fn contains<T: 'static>(&self, key: BbKey<T>) -> bool {
        self.values.contains_key(&key.id)
    }

    /// `true` when the key is declared, with or without a value.
    pub fn has_key<T: 'static>(&self, key: BbKey<T>) -> bool {
        self.has_memory(key.erase())
    }

    pub fn has_memory(&self, key: MemoryKey) -> bool {
        self.registered.contains(&key.0) || self.values.contains_key(&key.0)
    }

    pub fn state<T: 'static>(&self, key: BbKey<T>) -> MemoryState {
        self.state_of(key.erase())
    }

    pub fn state_of(&self, key: MemoryKey) -> MemoryState {
        if self.values.contains_key(&key.0) {
            MemoryState::ValuePresent
        } else if self.registered.contains(&key.0) {
            MemoryState::Registered
        } else {
            MemoryState::Absent
        }
    }

    /// Whether `key` satisfies a required presence state.
    ///
    /// - `ValuePresent`: a value is set.
    /// - `Registered`: the key is declared, whether or not it holds a value.
    /// - `Absent`: no value is set.
    pub fn matches(&self, key: MemoryKey, required: MemoryState) -> bool {
        match required {
            MemoryState::ValuePresent => self.values.contains_key(&key.0),
            MemoryState::Registered => self.has_memory(key),
            MemoryState::Absent => !self.values.contains_key(&key.0),
        }
    }

    pub fn satisfies(&self, preconditions: &Preconditions) -> bool {
        preconditions
            .iter()
            .all(|(key, required)| self.matches(key, required))
    }

    pub fn set<T: 'static>(&mut self, key: BbKey<T>, value: T) {
        self.registered.insert(key.id);
        self.values.insert(key.id, Box::new(value));
    }

    pub fn get<T: 'static>(&self, key: BbKey<T>) -> Option<&T> {
        let value = self.values.get(&key.id)?;
        value.downcast_ref::<T>().or_else(|| {
            panic!(
                "blackboard type mismatch for key id={} (stored type differs from requested)",
                key.id
            )
        })
    }

    pub fn get_mut<T: 'static>(&mut self, key: BbKey<T>) -> Option<&mut T> {
        let value = self.values.get_mut(&key.id)?;
        value.downcast_mut::<T>().or_else(|| {
            panic!(
                "blackboard type mismatch for key id={} (stored type differs from requested)",
                key.id
            )
        })
    }

    /// Mutable access to the value under `key`, inserting `init()` first when empty.
    pub fn get_or_insert_with<T: 'static>(
        &mut self,
        key: BbKey<T>,
        init: impl FnOnce() -> T,
    ) -> &mut T {
        if !self.values.contains_key(&key.id) {
            self.set(key, init());
        }
        self.values
            .get_mut(&key.id)
            .and_then(|value| value.downcast_mut::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "blackboard type mismatch for key id={} (stored type differs from requested)",
                    key.id
                )
            })
    }

    /// Take the value out of `key`. The key stays registered.
    pub fn remove<T: 'static>(&mut self, key: BbKey<T>) -> Option<T> {
        let value = self.values.remove(&key.id)?;
        value.downcast::<T>().map(|b| *b).ok().or_else(|| {
            panic!(
                "blackboard type mismatch for key id={} (stored type differs from requested)",
                key.id
            )
        })
    }

    /// Drop the value under `key`, if any. A no-op for keys without a value.
    pub fn forget<T: 'static>(&mut self, key: BbKey<T>) {
        self.values.remove(&key.id);
    }
}
