//! Package manifest handling.
//!
//! The manifest is a YAML mapping with a top-level `version` string. It is
//! loaded fully into memory, one key is replaced, and the whole mapping is
//! serialized back to the same path. `serde_yaml::Mapping` keeps insertion
//! order, so every other key is written back where it was.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::domain::ReleaseVersion;
use crate::error::{ReleaseError, Result};

/// Default manifest location, relative to the working directory
pub const DEFAULT_MANIFEST_PATH: &str = "pubspec.yaml";

const VERSION_KEY: &str = "version";

/// A loaded manifest document
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    path: PathBuf,
    data: Mapping,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// Fails if the file is missing, is not YAML, is not a mapping, or has no
    /// string `version` key.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReleaseError::ManifestMissing { path: path.clone() },
            _ => ReleaseError::Io(e),
        })?;

        let manifest = Self::parse(&path, &contents)?;
        debug!(path = %path.display(), keys = manifest.data.len(), "manifest loaded");
        Ok(manifest)
    }

    /// Parse manifest text; `path` is only used for error reporting and saving
    pub fn parse(path: impl Into<PathBuf>, contents: &str) -> Result<Self> {
        let path = path.into();
        let value: Value = serde_yaml::from_str(contents).map_err(|source| {
            ReleaseError::ManifestParse {
                path: path.clone(),
                source,
            }
        })?;

        let data = match value {
            Value::Mapping(mapping) => mapping,
            _ => return Err(ReleaseError::ManifestNotMapping { path }),
        };

        let manifest = Manifest { path, data };
        manifest.version()?;
        Ok(manifest)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current value of the `version` key
    pub fn version(&self) -> Result<&str> {
        match self.data.get(VERSION_KEY) {
            Some(Value::String(version)) => Ok(version.as_str()),
            Some(_) => Err(ReleaseError::VersionNotString {
                path: self.path.clone(),
            }),
            None => Err(ReleaseError::MissingVersionKey {
                path: self.path.clone(),
            }),
        }
    }

    /// Overwrite the `version` value in place, keeping its position.
    ///
    /// `parse` only accepts documents that already have a string `version`.
    pub fn set_version(&mut self, version: &ReleaseVersion) {
        if let Some(slot) = self.data.get_mut(VERSION_KEY) {
            *slot = Value::String(version.as_str().to_string());
        }
    }

    /// Top-level keys in document order
    pub fn keys(&self) -> Vec<String> {
        self.data
            .keys()
            .map(|key| match key {
                Value::String(s) => s.clone(),
                other => serde_yaml::to_string(other)
                    .map(|s| s.trim_end().to_string())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Serialize the mapping as YAML text
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.data).map_err(|source| ReleaseError::ManifestParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file this manifest was loaded from
    pub fn save(&self) -> Result<()> {
        let contents = self.to_yaml()?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), "manifest written");
        Ok(())
    }
}
