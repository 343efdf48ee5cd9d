use ai_core::{AgentKind, WorldMut, WorldView};

use crate::{DimensionId, Vec3};

pub trait NavWorldView: WorldView {
    /// The dimension this world view represents.
    fn dimension(&self) -> DimensionId;
    fn position(&self, agent: Self::Agent) -> Option<Vec3>;
    fn kind(&self, agent: Self::Agent) -> Option<AgentKind>;
}

pub trait NavWorldMut: WorldMut + NavWorldView {
    fn set_position(&mut self, agent: Self::Agent, position: Vec3);
}
