//! Main workflow orchestration logic
//!
//! Runs one release for one tag reference. The reference and every
//! collaborator are passed in explicitly, so the whole flow can be driven
//! from tests with in-memory git and hosting implementations.

use std::path::PathBuf;
use std::time::Duration;

use crate::attachments;
use crate::domain::{ReleaseId, ReleasePlan, TagReference};
use crate::error::Result;
use crate::git::Repository;
use crate::host::ReleaseHost;
use crate::publish::{PublishOutcome, Publisher, DEFAULT_SETTLE_DELAY};
use crate::ui;

/// Arguments for the release workflow
///
/// Mirrors the CLI arguments but in a format suitable for orchestration
/// logic, so the workflow can be called without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Tag reference, e.g. "checktypes/v1.2.3"
    pub reference: String,

    /// Directory the tag's directory part is resolved against.
    /// `None` resolves it against the current directory.
    pub root: Option<PathBuf>,

    /// Wait between deleting and recreating an alias
    pub settle_delay: Duration,

    /// Report the plan without contacting the release host
    pub dry_run: bool,
}

impl ReleaseWorkflowArgs {
    pub fn new(reference: impl Into<String>) -> Self {
        ReleaseWorkflowArgs {
            reference: reference.into(),
            root: None,
            settle_delay: DEFAULT_SETTLE_DELAY,
            dry_run: false,
        }
    }
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag that was released
    pub reference: String,

    /// Commit every release points at
    pub target: String,

    /// Releases in publishing order
    pub releases: Vec<ReleaseId>,

    /// Files attached to every release
    pub attachments: Vec<PathBuf>,

    /// One entry per published release; empty for a dry run
    pub outcomes: Vec<PublishOutcome>,
}

/// Main release workflow
///
/// 1. Parse the tag reference
/// 2. Collect the attachments from the tag's directory
/// 3. Resolve the commit the tag points to
/// 4. Derive the release plan
/// 5. Publish every release, unless this is a dry run
///
/// Steps 1-3 fail before anything is published.
pub fn run_release_workflow<R, H>(
    args: &ReleaseWorkflowArgs,
    repo: &R,
    host: &H,
) -> Result<WorkflowResult>
where
    R: Repository + ?Sized,
    H: ReleaseHost + ?Sized,
{
    let reference = TagReference::parse(&args.reference)?;

    let dir = match &args.root {
        Some(root) => root.join(reference.directory()),
        None => PathBuf::from(reference.directory()),
    };
    let collected = attachments::list_files(&dir)?;
    for warning in &collected.warnings {
        ui::display_warning(warning);
    }

    let target = repo.resolve_commit(&args.reference)?;

    let plan = ReleasePlan::for_reference(&reference);
    ui::display_release_plan(&args.reference, &target, &plan, &collected.files);

    let outcomes = if args.dry_run {
        ui::display_status("Dry run: no release was created");
        Vec::new()
    } else {
        Publisher::new(host)
            .with_settle_delay(args.settle_delay)
            .publish_all(&plan, &target, &collected.files)?
    };

    Ok(WorkflowResult {
        reference: args.reference.clone(),
        target,
        releases: plan.ids(),
        attachments: collected.files,
        outcomes,
    })
}
