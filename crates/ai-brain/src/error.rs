/// Misuse of the scheduler's agent registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    #[error("agent {0} is already registered")]
    DuplicateAgent(u64),

    #[error("agent {0} is not registered")]
    UnknownAgent(u64),
}
