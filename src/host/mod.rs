//! Release-hosting service abstraction
//!
//! Releases are created and deleted through the [ReleaseHost] trait:
//!
//! - [gh::GhCli]: drives the GitHub CLI (`gh release ...`)
//! - [mock::MockReleaseHost]: an in-memory host for testing

pub mod gh;
pub mod mock;

pub use gh::GhCli;
pub use mock::{HostCall, MockReleaseHost};

use crate::domain::ReleaseId;
use crate::error::Result;
use std::path::PathBuf;

/// Operations the publisher needs from a release-hosting service
///
/// Failures are reported as [crate::error::ReleaseError::Publish].
pub trait ReleaseHost {
    /// Delete the release and its tag
    ///
    /// # Returns
    /// * `Ok(())` - The release was deleted
    /// * `Err` - The release does not exist or the service refused
    fn delete_release(&self, release: &ReleaseId) -> Result<()>;

    /// Create a release pointing at `target` with `files` attached
    ///
    /// # Arguments
    /// * `release` - Release (and tag) name, e.g. "checktypes/v1.2"
    /// * `target` - Commit hash the release tag is created at
    /// * `files` - Paths uploaded as release assets
    ///
    /// # Returns
    /// * `Ok(())` - The release was created
    /// * `Err` - A release with that name already exists or the service refused
    fn create_release(&self, release: &ReleaseId, target: &str, files: &[PathBuf]) -> Result<()>;
}
