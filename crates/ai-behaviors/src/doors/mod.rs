//! Door coordination: open doors on the path edge, close them once nobody needs them.
//!
//! There are no locks. Each agent's release scan re-reads the live door state and the paths of
//! nearby agents of its kind every time it runs, and an agent gives up its claim instead of closing
//! a door another agent is standing on or walking into. Whoever is the last one to leave the door's
//! vicinity ends up closing it.

mod claims;
mod release;
mod task;

pub use claims::{DoorClaims, DoorScanState};
pub use release::{close_doors_behind, AbandonReason, ReleaseReport};
pub use task::OpenDoorsTask;
