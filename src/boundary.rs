use std::fmt;

use crate::domain::VersionChange;

/// Non-fatal conditions found while preparing a release.
/// These are reported to the user but do not stop the manifest update
/// unless an increase is required.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// The tag's version is lower than the manifest's current version
    VersionDowngrade { old: String, new: String },
    /// The tag's version equals the manifest's current version
    VersionUnchanged { version: String },
    /// The manifest's current version cannot be compared semantically
    UnparsableCurrentVersion { value: String },
}

impl ReleaseWarning {
    /// Warning for a version change, if the change deserves one
    pub fn for_change(change: VersionChange, old: &str, new: &str) -> Option<Self> {
        match change {
            VersionChange::Upgrade => None,
            VersionChange::Unchanged => Some(ReleaseWarning::VersionUnchanged {
                version: new.to_string(),
            }),
            VersionChange::Downgrade => Some(ReleaseWarning::VersionDowngrade {
                old: old.to_string(),
                new: new.to_string(),
            }),
            VersionChange::Unknown => Some(ReleaseWarning::UnparsableCurrentVersion {
                value: old.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::VersionDowngrade { old, new } => {
                write!(f, "Version goes backwards: {} is lower than current {}", new, old)
            }
            ReleaseWarning::VersionUnchanged { version } => {
                write!(f, "Version {} is already the current version", version)
            }
            ReleaseWarning::UnparsableCurrentVersion { value } => {
                write!(
                    f,
                    "Cannot compare current version '{}': not a semantic version",
                    value
                )
            }
        }
    }
}
