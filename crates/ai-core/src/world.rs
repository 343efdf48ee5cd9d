use crate::AgentId;

/// Read-only world access.
///
/// The core crate intentionally does not prescribe which queries a world must
/// expose; specific subsystems (nav, doors, etc.) define extension traits.
pub trait WorldView {
    type Agent: AgentId;

    /// Every agent currently alive in this world, in stable id order.
    fn agents(&self) -> Vec<Self::Agent>;
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}
