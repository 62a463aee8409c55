use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use crate::domain::ReleaseId;
use crate::error::{ReleaseError, Result};
use crate::host::ReleaseHost;

/// A request received by [MockReleaseHost]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Delete {
        release: ReleaseId,
    },
    Create {
        release: ReleaseId,
        target: String,
        files: Vec<PathBuf>,
    },
}

#[derive(Default)]
struct HostState {
    releases: BTreeSet<ReleaseId>,
    calls: Vec<HostCall>,
    call_times: Vec<Instant>,
    failing_creates: BTreeSet<ReleaseId>,
}

/// In-memory release host for testing without touching a real service
///
/// Behaves like the real service where it matters: deleting a missing
/// release fails, and creating an existing one fails.
#[derive(Default)]
pub struct MockReleaseHost {
    state: Mutex<HostState>,
}

impl MockReleaseHost {
    /// Create a host with no releases
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing release
    pub fn add_release(&self, release: impl Into<ReleaseId>) {
        self.lock().releases.insert(release.into());
    }

    /// Make every creation of `release` fail
    pub fn fail_create(&self, release: impl Into<ReleaseId>) {
        self.lock().failing_creates.insert(release.into());
    }

    /// Releases currently present, sorted by name
    pub fn releases(&self) -> Vec<ReleaseId> {
        self.lock().releases.iter().cloned().collect()
    }

    /// Every request received so far, in order
    pub fn calls(&self) -> Vec<HostCall> {
        self.lock().calls.clone()
    }

    /// When each request in [MockReleaseHost::calls] was received
    pub fn call_times(&self) -> Vec<Instant> {
        self.lock().call_times.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HostState> {
        // A poisoned lock only means another test thread panicked.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ReleaseHost for MockReleaseHost {
    fn delete_release(&self, release: &ReleaseId) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(HostCall::Delete {
            release: release.clone(),
        });
        state.call_times.push(Instant::now());

        if state.releases.remove(release) {
            Ok(())
        } else {
            Err(ReleaseError::publish(format!("release not found: {}", release)))
        }
    }

    fn create_release(&self, release: &ReleaseId, target: &str, files: &[PathBuf]) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(HostCall::Create {
            release: release.clone(),
            target: target.to_string(),
            files: files.to_vec(),
        });
        state.call_times.push(Instant::now());

        if state.failing_creates.contains(release) {
            return Err(ReleaseError::publish(format!(
                "service rejected release {}",
                release
            )));
        }
        if !state.releases.insert(release.clone()) {
            return Err(ReleaseError::publish(format!(
                "a release with tag {} already exists",
                release
            )));
        }
        Ok(())
    }
}
