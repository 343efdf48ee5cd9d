use std::collections::BTreeMap;

use ai_core::{AgentId, Blackboard};

/// Read-only view of every other agent's blackboard while one agent is being ticked.
///
/// The agent being ticked is not visible here; its own blackboard is passed mutably.
#[derive(Clone, Copy)]
pub struct Peers<'a, A: AgentId> {
    boards: &'a BTreeMap<A, Blackboard>,
}

impl<'a, A: AgentId> Peers<'a, A> {
    pub fn new(boards: &'a BTreeMap<A, Blackboard>) -> Self {
        Self { boards }
    }

    pub fn get(&self, agent: A) -> Option<&'a Blackboard> {
        let boards = self.boards;
        boards.get(&agent)
    }

    pub fn iter(&self) -> impl Iterator<Item = (A, &'a Blackboard)> + 'a {
        let boards = self.boards;
        boards.iter().map(|(a, bb)| (*a, bb))
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}
