//! The exclusively-owned game session and its public snapshot.

#[allow(clippy::module_inception)]
pub mod session;
pub mod snapshot;

pub use session::{Session, Status};
pub use snapshot::SessionSnapshot;
