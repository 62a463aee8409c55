use std::fmt;

use crate::domain::ReleaseId;

/// Non-fatal conditions hit while releasing.
/// These are reported to the user and the run continues.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// A subdirectory was found among the attachments and left out
    SkippedDirectory { name: String },
    /// The release could not be deleted before being recreated
    DeleteFailed { release: ReleaseId, reason: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::SkippedDirectory { name } => {
                write!(f, "skipping dir {:?}", name)
            }
            ReleaseWarning::DeleteFailed { release, reason } => {
                let first_line = reason.lines().next().unwrap_or_default();
                write!(f, "could not delete release {:?}: {}", release.as_str(), first_line)
            }
        }
    }
}
