use crate::domain::reference::{TagReference, TagVersion};
use std::fmt;

/// Name of a single release on the hosting service, `directory/component`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReleaseId(String);

impl ReleaseId {
    pub fn new(directory: &str, component: &str) -> Self {
        ReleaseId(format!("{}/{}", directory, component))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReleaseId {
    fn from(s: &str) -> Self {
        ReleaseId(s.to_string())
    }
}

impl From<String> for ReleaseId {
    fn from(s: String) -> Self {
        ReleaseId(s)
    }
}

/// Version components to publish for a version.
///
/// Stable versions get `[vM, vM.m, full]`. Prereleases only get `[full]`,
/// so the floating aliases never move onto a prerelease.
pub fn derive_releases(version: &TagVersion) -> Vec<String> {
    if version.is_prerelease() {
        return vec![version.as_str().to_string()];
    }

    vec![
        version.major_component(),
        version.major_minor_component(),
        version.as_str().to_string(),
    ]
}

/// One entry of a release plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRelease {
    pub id: ReleaseId,
    /// Delete any existing release before creating it again
    pub update: bool,
}

/// Ordered set of releases produced for one tag reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    releases: Vec<PlannedRelease>,
}

impl ReleasePlan {
    /// Build the plan for a tag reference.
    ///
    /// Every identifier other than the tag itself is a floating alias and
    /// gets updated; the exact version is only ever created.
    pub fn for_reference(reference: &TagReference) -> Self {
        let tag = reference.to_string();
        let releases = derive_releases(reference.version())
            .iter()
            .map(|component| {
                let id = ReleaseId::new(reference.directory(), component);
                let update = id.as_str() != tag;
                PlannedRelease { id, update }
            })
            .collect();

        ReleasePlan { releases }
    }

    pub fn releases(&self) -> &[PlannedRelease] {
        &self.releases
    }

    pub fn ids(&self) -> Vec<ReleaseId> {
        self.releases.iter().map(|r| r.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(reference: &str) -> ReleasePlan {
        ReleasePlan::for_reference(&TagReference::parse(reference).unwrap())
    }

    #[test]
    fn test_derive_stable_releases() {
        let version = TagVersion::parse("v1.2.3").unwrap();
        assert_eq!(derive_releases(&version), vec!["v1", "v1.2", "v1.2.3"]);
    }

    #[test]
    fn test_derive_zero_major() {
        let version = TagVersion::parse("v0.2.3").unwrap();
        assert_eq!(derive_releases(&version), vec!["v0", "v0.2", "v0.2.3"]);
    }

    #[test]
    fn test_derive_prerelease() {
        let version = TagVersion::parse("v1.2.3-rc.1").unwrap();
        assert_eq!(derive_releases(&version), vec!["v1.2.3-rc.1"]);
    }

    #[test]
    fn test_derive_keeps_build_metadata_on_full_version() {
        let version = TagVersion::parse("v1.2.3+abc").unwrap();
        assert_eq!(derive_releases(&version), vec!["v1", "v1.2", "v1.2.3+abc"]);
    }

    #[test]
    fn test_plan_update_flags() {
        let plan = plan("checktypes/v1.2.3");
        let flags: Vec<(&str, bool)> = plan
            .releases()
            .iter()
            .map(|r| (r.id.as_str(), r.update))
            .collect();

        assert_eq!(
            flags,
            vec![
                ("checktypes/v1", true),
                ("checktypes/v1.2", true),
                ("checktypes/v1.2.3", false),
            ]
        );
    }

    #[test]
    fn test_plan_prerelease_is_fresh_only() {
        let plan = plan("lib/v0.9.0-beta.1");
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.releases()[0].id.as_str(), "lib/v0.9.0-beta.1");
        assert!(!plan.releases()[0].update);
    }

    #[test]
    fn test_plan_is_deterministic() {
        assert_eq!(plan("tools/v2.0.1"), plan("tools/v2.0.1"));
    }
}
