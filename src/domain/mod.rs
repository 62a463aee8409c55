//! Domain logic - pure release rules independent of git and the hosting service

pub mod reference;
pub mod release;

pub use reference::{TagReference, TagVersion};
pub use release::{derive_releases, PlannedRelease, ReleaseId, ReleasePlan};
