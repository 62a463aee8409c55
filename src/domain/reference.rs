use crate::error::{ReleaseError, Result};
use std::fmt;

/// Semantic version as written in a tag, e.g. `v1.2.3-rc.1`.
///
/// Keeps the raw text so the exact release can be named after it, and the
/// parsed form so the floating aliases can be derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVersion {
    raw: String,
    parsed: semver::Version,
}

impl TagVersion {
    /// Parse a `v`-prefixed semantic version.
    ///
    /// Shorthands such as `v1` or `v1.2` are rejected: every tag names an
    /// exact `major.minor.patch`.
    pub fn parse(raw: &str) -> Result<Self> {
        let bare = raw
            .strip_prefix('v')
            .ok_or_else(|| ReleaseError::version(format!("{:?}: missing leading 'v'", raw)))?;

        let parsed = semver::Version::parse(bare)
            .map_err(|e| ReleaseError::version(format!("{:?}: {}", raw, e)))?;

        Ok(TagVersion {
            raw: raw.to_string(),
            parsed,
        })
    }

    pub fn major(&self) -> u64 {
        self.parsed.major
    }

    pub fn minor(&self) -> u64 {
        self.parsed.minor
    }

    pub fn patch(&self) -> u64 {
        self.parsed.patch
    }

    /// Prerelease label, empty for stable versions
    pub fn prerelease(&self) -> &str {
        self.parsed.pre.as_str()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.parsed.pre.is_empty()
    }

    /// `vM`
    pub fn major_component(&self) -> String {
        format!("v{}", self.parsed.major)
    }

    /// `vM.m`
    pub fn major_minor_component(&self) -> String {
        format!("v{}.{}", self.parsed.major, self.parsed.minor)
    }

    /// The version exactly as it appeared in the tag
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A git tag of the form `directory/version` (e.g. `checktypes/v1.2.3`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagReference {
    directory: String,
    version: TagVersion,
}

impl TagReference {
    /// Split a reference into its directory and version parts.
    ///
    /// # Errors
    /// * `ReleaseError::Format` - not exactly two non-empty `/`-separated parts
    /// * `ReleaseError::Version` - the second part is not a valid semantic version
    pub fn parse(reference: &str) -> Result<Self> {
        let parts: Vec<&str> = reference.split('/').collect();
        if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
            return Err(ReleaseError::format(format!(
                "{:?} does not match \"directory/version\"",
                reference
            )));
        }

        let version = TagVersion::parse(parts[1])?;

        Ok(TagReference {
            directory: parts[0].to_string(),
            version,
        })
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn version(&self) -> &TagVersion {
        &self.version
    }
}

impl fmt::Display for TagReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.directory, self.version)
    }
}
