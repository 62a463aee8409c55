//! Collects the files attached to every release of a tag.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseError, Result};
use crate::warning::ReleaseWarning;

/// Files found in a release directory, plus the entries that were left out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachments {
    pub files: Vec<PathBuf>,
    pub warnings: Vec<ReleaseWarning>,
}

/// Lists the immediate entries of `dir` that are not directories.
///
/// Returned paths are prefixed with `dir` and sorted by file name.
/// Subdirectories are never attached; each one produces a
/// [`ReleaseWarning::SkippedDirectory`]. Symlinks are not followed.
///
/// # Errors
/// * `ReleaseError::Directory` - if `dir` cannot be read
pub fn list_files(dir: &Path) -> Result<Attachments> {
    let read_err = |e: std::io::Error| ReleaseError::directory(format!("{}: {}", dir.display(), e));

    let mut entries = fs::read_dir(dir)
        .map_err(read_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut attachments = Attachments::default();
    for entry in entries {
        let file_type = entry.file_type().map_err(read_err)?;
        if file_type.is_dir() {
            log::debug!("not attaching directory {}", entry.path().display());
            attachments.warnings.push(ReleaseWarning::SkippedDirectory {
                name: entry.file_name().to_string_lossy().into_owned(),
            });
            continue;
        }
        attachments.files.push(dir.join(entry.file_name()));
    }

    Ok(attachments)
}
