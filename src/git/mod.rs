//! Version-control abstraction layer
//!
//! Releases point at the commit their tag names. This module hides how that
//! commit is looked up behind the [Repository] trait:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust
//! # use dir_release::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> dir_release::Result<()> {
//! let hash = repo.resolve_commit("checktypes/v1.2.3")?;
//! println!("releasing {}", hash);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only git queries needed to publish a release
///
/// Implementations map their underlying errors to
/// [crate::error::ReleaseError::Vcs].
pub trait Repository {
    /// Resolve a tag reference to the hash of the commit it points to
    ///
    /// Annotated tags are peeled, so the result is always a commit hash.
    ///
    /// # Arguments
    /// * `reference` - Tag name, e.g. "checktypes/v1.2.3"
    ///
    /// # Returns
    /// * `Ok(String)` - Full hex commit hash
    /// * `Err` - If the reference is unknown or does not lead to a commit
    fn resolve_commit(&self, reference: &str) -> Result<String>;
}
