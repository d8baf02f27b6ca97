//! Main release workflow orchestration logic
//!
//! Keeps the pipeline apart from CLI argument parsing so it can run against
//! any [Repository] and manifest path, including mocks in tests.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::boundary::ReleaseWarning;
use crate::config::Config;
use crate::domain::{ReleaseVersion, VersionChange};
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use crate::manifest::Manifest;
use crate::ui;

/// Arguments for the release workflow
///
/// Mirrors the CLI Args after they have been merged with the configuration
/// file, so the workflow can be called without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Manifest to update
    pub manifest_path: PathBuf,

    /// Refuse versions that are not strictly greater than the current one
    pub require_increase: bool,

    /// Run every step except the final write
    pub dry_run: bool,
}

impl ReleaseWorkflowArgs {
    /// Workflow arguments taken from configuration alone
    pub fn from_config(config: &Config) -> Self {
        ReleaseWorkflowArgs {
            manifest_path: config.manifest.path.clone(),
            require_increase: config.release.require_increase,
            dry_run: false,
        }
    }
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag the version came from
    pub tag: String,

    /// The manifest's version before the update
    pub previous_version: String,

    /// The version now in the manifest
    pub version: String,

    /// Whether the manifest file was rewritten
    pub written: bool,

    /// Non-fatal issues reported along the way
    pub warnings: Vec<ReleaseWarning>,
}

/// Main release workflow
///
/// 1. Read the nearest tag from `repo`
/// 2. Strip letters from it and validate the result
/// 3. Load the manifest and compare versions
/// 4. Replace the version and write the manifest back
///
/// The manifest is only opened once validation has passed, so an invalid tag
/// never touches it.
///
/// # Returns
///
/// * `Ok(WorkflowResult)` - What was (or, in a dry run, would be) written
/// * `Err(ReleaseError::InvalidVersion)` - The tag does not yield a valid version
/// * `Err` - Any git, manifest or policy failure
pub fn run_release_workflow<R: Repository>(
    repo: &R,
    args: &ReleaseWorkflowArgs,
) -> Result<WorkflowResult> {
    let tag = repo.latest_tag()?;
    info!(tag = %tag, "latest tag");

    let candidate = tag.version_candidate();
    debug!(candidate = %candidate, "normalized tag");
    ui::display_derived_version(&tag.name, &candidate);

    let version = ReleaseVersion::from_tag(&tag)?;

    let mut manifest = Manifest::load(&args.manifest_path)?;
    let previous_version = manifest.version()?.to_string();

    let change = version.compare_to(&previous_version);
    debug!(?change, old = %previous_version, new = %version, "compared versions");

    let mut warnings = Vec::new();
    if let Some(warning) = ReleaseWarning::for_change(change, &previous_version, version.as_str()) {
        ui::display_warning(&warning);
        warnings.push(warning);
    }

    if args.require_increase && matches!(change, VersionChange::Downgrade | VersionChange::Unchanged) {
        return Err(ReleaseError::NotAnUpgrade {
            old: previous_version,
            new: version.to_string(),
        });
    }

    ui::display_version_change(&previous_version, version.as_str());

    if args.dry_run {
        ui::display_dry_run(&manifest.path().display().to_string(), version.as_str());
        return Ok(WorkflowResult {
            tag: tag.name,
            previous_version,
            version: version.to_string(),
            written: false,
            warnings,
        });
    }

    ui::display_release_creating(version.as_str());
    manifest.set_version(&version);
    manifest.save()?;
    info!(version = %version, path = %manifest.path().display(), "manifest updated");
    ui::display_release_created(version.as_str());

    Ok(WorkflowResult {
        tag: tag.name,
        previous_version,
        version: version.to_string(),
        written: true,
        warnings,
    })
}
