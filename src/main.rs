use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pubspec_release::cli::{run_release_workflow, ReleaseWorkflowArgs};
use pubspec_release::config;
use pubspec_release::git::Git2Repository;
use pubspec_release::logging;
use pubspec_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "pubspec-release",
    version,
    about = "Set the pubspec.yaml version from the latest git tag"
)]
struct Args {
    #[arg(short, long, help = "Manifest file to update [default: pubspec.yaml]")]
    manifest: Option<PathBuf>,

    #[arg(short, long, default_value = ".", help = "Path inside the git repository")]
    repo: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Refuse versions that are not greater than the current one")]
    require_increase: bool,

    #[arg(long, help = "Preview what would happen without writing the manifest")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let mut workflow_args = ReleaseWorkflowArgs::from_config(&config);
    if let Some(manifest) = args.manifest {
        workflow_args.manifest_path = manifest;
    }
    workflow_args.require_increase |= args.require_increase;
    workflow_args.dry_run = args.dry_run;

    let repo = Git2Repository::open(&args.repo)?;

    match run_release_workflow(&repo, &workflow_args) {
        Ok(_) => Ok(()),
        Err(e) if e.is_invalid_version() => {
            ui::display_invalid_version(&e.to_string());
            std::process::exit(1);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
