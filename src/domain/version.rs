use std::cmp::Ordering;
use std::fmt;

use regex::Regex;
use semver::{BuildMetadata, Version};

use super::tag::Tag;
use crate::error::{ReleaseError, Result};

/// Accepted release version shape. The major component may not contain a zero
/// anywhere, so "10.0.0" is rejected along with "0.1.0".
pub const VERSION_PATTERN: &str = r"^[1-9]+\.([0-9]{1}|[1-9][0-9]+)\.([0-9]{1}|[1-9][0-9]+)$";

/// Removes every ASCII letter from `raw`, leaving digits, dots and any other
/// characters in place.
///
/// Total over all inputs: "release-1" becomes "-1", "beta1.2.3" becomes "1.2.3".
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_ascii_alphabetic()).collect()
}

/// Checks a normalized candidate against [`VERSION_PATTERN`].
pub fn is_valid(candidate: &str) -> bool {
    Regex::new(VERSION_PATTERN)
        .map(|re| re.is_match(candidate))
        .unwrap_or(false)
}

/// A version string that has passed validation.
///
/// The only way to obtain one is through [`ReleaseVersion::parse`] or
/// [`ReleaseVersion::from_tag`], so holding a value means the manifest may be
/// written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Validate an already-normalized candidate
    pub fn parse(candidate: &str) -> Result<Self> {
        Self::validate(candidate, candidate)
    }

    /// Normalize the tag name and validate the result
    pub fn from_tag(tag: &Tag) -> Result<Self> {
        let candidate = tag.version_candidate();
        Self::validate(&tag.name, &candidate)
    }

    fn validate(source: &str, candidate: &str) -> Result<Self> {
        if is_valid(candidate) {
            Ok(ReleaseVersion(candidate.to_string()))
        } else {
            Err(ReleaseError::InvalidVersion {
                tag: source.to_string(),
                candidate: candidate.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Semantic version view, `None` only when a component overflows `u64`
    pub fn to_semver(&self) -> Option<Version> {
        Version::parse(&self.0).ok()
    }

    /// Classify the move from the manifest's current `old` value to this version.
    ///
    /// Build metadata on the old value (e.g. Flutter's "1.2.0+7") is ignored.
    pub fn compare_to(&self, old: &str) -> VersionChange {
        let new = match self.to_semver() {
            Some(v) => v,
            None => return VersionChange::Unknown,
        };
        let old = match Version::parse(old.trim()) {
            Ok(v) => Version {
                build: BuildMetadata::EMPTY,
                ..v
            },
            Err(_) => return VersionChange::Unknown,
        };

        match new.cmp(&old) {
            Ordering::Greater => VersionChange::Upgrade,
            Ordering::Equal => VersionChange::Unchanged,
            Ordering::Less => VersionChange::Downgrade,
        }
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the new release version relates to the one currently in the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChange {
    Upgrade,
    Unchanged,
    Downgrade,
    /// The old value is not a semantic version
    Unknown,
}

impl VersionChange {
    pub fn is_upgrade(self) -> bool {
        self == VersionChange::Upgrade
    }
}
