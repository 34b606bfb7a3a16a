//! Workspace lifecycle subsystems: skeleton scaffolding, profile
//! synchronization, journaling, retention, enumeration, and the
//! provisioning flow that ties them together.

pub mod journal;
pub mod profile;
pub mod provision;
pub mod registry;
pub mod retention;
pub mod scaffold;
