use std::path::Path;

use miette::{miette, Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};


/// Parses a level filter directive (e.g. `info` or `doc_site_conf=debug,warn`).
pub fn parse_level_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .into_diagnostic()
        .wrap_err_with(|| miette!("Invalid log level filter: {directive:?}."))
}


/// Initializes the global tracing subscriber.
///
/// Console output goes to stderr so that exports written to stdout stay clean.
/// If `log_file_output_directory` is given, a second layer appends
/// to `log_file_name` inside it.
///
/// The returned guard flushes the log file when dropped; keep it alive until exit.
pub fn initialize_tracing(
    console_level_filter: EnvFilter,
    log_file_output_directory: Option<&Path>,
    log_file_name: &str,
) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_level_filter);

    let (file_layer, guard) = match log_file_output_directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)
                .into_diagnostic()
                .wrap_err_with(|| {
                    miette!(
                        "Failed to create missing log file directory at {}.",
                        directory.display()
                    )
                })?;

            let file_appender = tracing_appender::rolling::never(directory, log_file_name);
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new("debug"));

            (Some(file_layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install global tracing subscriber.")?;

    Ok(guard)
}
