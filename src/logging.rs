use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging/tracing subsystem.
///
/// Logs go to stderr; stdout carries the release progress lines.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pubspec_release=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pubspec_release=warn"))
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(console::colors_enabled_stderr())
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
