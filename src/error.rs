use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for pubspec-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Not a git repository ({}): {source}", path.display())]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("No tag found: {0}")]
    NoTagFound(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("invalid version number '{candidate}' derived from tag '{tag}'")]
    InvalidVersion { tag: String, candidate: String },

    #[error("Manifest not found: {}", path.display())]
    ManifestMissing { path: PathBuf },

    #[error("Cannot parse manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Manifest {} is not a key-value mapping", path.display())]
    ManifestNotMapping { path: PathBuf },

    #[error("Manifest {} has no 'version' key", path.display())]
    MissingVersionKey { path: PathBuf },

    #[error("Manifest {} has a 'version' value that is not a string", path.display())]
    VersionNotString { path: PathBuf },

    #[error("Version {new} is not greater than current version {old}")]
    NotAnUpgrade { old: String, new: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in pubspec-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a missing-tag error with context
    pub fn no_tag(msg: impl Into<String>) -> Self {
        ReleaseError::NoTagFound(msg.into())
    }

    /// True for the one failure the binary reports with its own message and exit status 1
    pub fn is_invalid_version(&self) -> bool {
        matches!(self, ReleaseError::InvalidVersion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_invalid_version_message() {
        let err = ReleaseError::InvalidVersion {
            tag: "release-1".to_string(),
            candidate: "-1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("invalid version number"));
        assert!(msg.contains("release-1"));
        assert!(msg.contains("'-1'"));
        assert!(err.is_invalid_version());
    }

    #[test]
    fn test_only_invalid_version_is_flagged() {
        let errors = vec![
            ReleaseError::config("x"),
            ReleaseError::no_tag("x"),
            ReleaseError::ManifestMissing {
                path: PathBuf::from("pubspec.yaml"),
            },
            ReleaseError::NotAnUpgrade {
                old: "2.0.0".to_string(),
                new: "1.0.0".to_string(),
            },
        ];

        for err in errors {
            assert!(!err.is_invalid_version(), "unexpected flag on {}", err);
        }
    }

    #[test]
    fn test_manifest_errors_name_the_path() {
        let path = PathBuf::from("app/pubspec.yaml");
        let errors = vec![
            ReleaseError::ManifestMissing { path: path.clone() },
            ReleaseError::ManifestNotMapping { path: path.clone() },
            ReleaseError::MissingVersionKey { path: path.clone() },
            ReleaseError::VersionNotString { path },
        ];

        for err in errors {
            assert!(err.to_string().contains("app/pubspec.yaml"));
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::no_tag("x"), "No tag found"),
            (
                ReleaseError::NotAnUpgrade {
                    old: "1.0.0".to_string(),
                    new: "1.0.0".to_string(),
                },
                "Version 1.0.0 is not greater",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
