//! User interface module - console output for the release pipeline.
//!
//! Progress lines go to stdout, problems to stderr. Styling comes from
//! `console`, which drops colours when the stream is not a terminal, so the
//! plain text stays stable for scripts and tests.

pub mod formatter;

pub use formatter::{
    display_derived_version, display_dry_run, display_error, display_invalid_version,
    display_release_created, display_release_creating, display_version_change, display_warning,
};
