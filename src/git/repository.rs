use crate::error::{ReleaseError, Result};
use git2::Repository as Git2Repo;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    path: PathBuf,
    repo: OnceCell<Git2Repo>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repository = Self::discover_on_demand(path);
        repository.repo()?;
        Ok(repository)
    }

    /// Discover the repository containing `path` on first use.
    ///
    /// Errors finding the repository surface from the first query instead
    /// of from construction.
    pub fn discover_on_demand<P: AsRef<Path>>(path: P) -> Self {
        Git2Repository {
            path: path.as_ref().to_path_buf(),
            repo: OnceCell::new(),
        }
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        let path = repo.path().to_path_buf();
        Git2Repository {
            path,
            repo: OnceCell::from(repo),
        }
    }

    fn repo(&self) -> Result<&Git2Repo> {
        if let Some(repo) = self.repo.get() {
            return Ok(repo);
        }

        log::debug!("discovering git repository from {}", self.path.display());
        let repo = Git2Repo::discover(&self.path).map_err(|e| {
            ReleaseError::vcs(format!(
                "Not in a git repository ({}): {}",
                self.path.display(),
                e.message()
            ))
        })?;
        Ok(self.repo.get_or_init(|| repo))
    }
}

impl super::Repository for Git2Repository {
    fn resolve_commit(&self, reference: &str) -> Result<String> {
        let repo = self.repo()?;
        let tag_ref = format!("refs/tags/{}", reference);

        let object = match repo.revparse_single(&tag_ref) {
            Ok(object) => object,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                log::debug!("{} not found, resolving {} as a revision", tag_ref, reference);
                repo.revparse_single(reference).map_err(|e| {
                    ReleaseError::vcs(format!("Unknown reference '{}': {}", reference, e.message()))
                })?
            }
            Err(e) => return Err(e.into()),
        };

        let commit = object.peel_to_commit().map_err(|e| {
            ReleaseError::vcs(format!(
                "Reference '{}' does not point to a commit: {}",
                reference,
                e.message()
            ))
        })?;

        let hash = commit.id().to_string();
        log::debug!("{} resolves to {}", reference, hash);
        Ok(hash)
    }
}
