//! Creates the releases of a plan on the hosting service.
//!
//! Floating aliases (`vM`, `vM.m`) are recreated: the old release is
//! deleted, the publisher waits for the service to settle, then creates the
//! release again at the new commit. The exact version is only created.
//!
//! Releases are processed one at a time in plan order. The first failed
//! creation stops the run; releases already published are left in place.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::{PlannedRelease, ReleaseId, ReleasePlan};
use crate::error::Result;
use crate::host::ReleaseHost;
use crate::ui;
use crate::warning::ReleaseWarning;

/// Settling delay used when nothing else is configured
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(30);

/// What the publisher did for one release
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    pub release: ReleaseId,
    /// The release was deleted-then-recreated rather than just created
    pub updated: bool,
    /// Set when the pre-update deletion failed
    pub warning: Option<ReleaseWarning>,
    /// Measured time spent waiting between deletion and creation
    pub waited: Duration,
}

/// Publishes planned releases through a [ReleaseHost]
pub struct Publisher<'a, H: ReleaseHost + ?Sized> {
    host: &'a H,
    settle_delay: Duration,
}

impl<'a, H: ReleaseHost + ?Sized> Publisher<'a, H> {
    pub fn new(host: &'a H) -> Self {
        Publisher {
            host,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    /// Override the wait between deleting and recreating an alias
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Publish a single release.
    ///
    /// For updates, a failed deletion is only a warning since the alias may
    /// not exist yet. The settling wait happens regardless.
    ///
    /// # Errors
    /// * `ReleaseError::Publish` - if the release cannot be created
    pub fn publish(
        &self,
        release: &PlannedRelease,
        target: &str,
        attachments: &[PathBuf],
    ) -> Result<PublishOutcome> {
        let mut outcome = PublishOutcome {
            release: release.id.clone(),
            updated: release.update,
            warning: None,
            waited: Duration::ZERO,
        };

        if release.update {
            if let Err(e) = self.host.delete_release(&release.id) {
                let warning = ReleaseWarning::DeleteFailed {
                    release: release.id.clone(),
                    reason: e.to_string(),
                };
                ui::display_warning(&warning);
                outcome.warning = Some(warning);
            }

            let settle_start = Instant::now();
            if !self.settle_delay.is_zero() {
                ui::display_status(&format!(
                    "Waiting {:?} before recreating {}",
                    self.settle_delay, release.id
                ));
                thread::sleep(self.settle_delay);
            }
            outcome.waited = settle_start.elapsed();
        }

        self.host.create_release(&release.id, target, attachments)?;

        Ok(outcome)
    }

    /// Publish every release of the plan in order, stopping at the first failure.
    pub fn publish_all(
        &self,
        plan: &ReleasePlan,
        target: &str,
        attachments: &[PathBuf],
    ) -> Result<Vec<PublishOutcome>> {
        let mut outcomes = Vec::with_capacity(plan.len());

        for release in plan.releases() {
            ui::display_status(&format!("Publishing release {}", release.id));
            let outcome = self.publish(release, target, attachments)?;
            let verb = if outcome.updated { "Updated" } else { "Created" };
            ui::display_success(&format!("{} release {}", verb, release.id));
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
