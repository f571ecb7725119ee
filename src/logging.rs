//! Tracing setup.
//!
//! The terminal belongs to the table, so every record goes to a daily
//! rotating file under the local data directory (`pigpen/logs`). `RUST_LOG`
//! overrides the level picked by `--verbose`.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "pigpen.log";

/// Directives used when `RUST_LOG` is unset.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        // Sort, page and selection changes.
        "pigpen=debug,warn"
    } else {
        "pigpen=info,warn"
    }
}

/// Build the level filter, preferring `RUST_LOG` when it parses.
fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails when the log directory cannot be resolved or created, or when a
/// global subscriber is already set.
///
/// ```no_run
/// pigpen::logging::init(true)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let dir = log_directory()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;
    std::fs::create_dir_all(&dir)?;

    let writer = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter(verbose))
        .try_init()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), verbose, "pigpen starting");
    tracing::debug!(dir = %dir.display(), "Writing logs");
    Ok(())
}

/// Where log files are written, if the platform has a local data directory.
pub fn log_directory() -> Option<PathBuf> {
    dirs::data_local_dir().map(|base| base.join("pigpen").join("logs"))
}

/// Record a clean exit.
pub fn shutdown() {
    tracing::info!("pigpen exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_layout() {
        if let Some(dir) = log_directory() {
            assert!(dir.ends_with("pigpen/logs"));
        }
    }

    #[test]
    fn test_verbose_raises_level() {
        assert_eq!(default_directives(false), "pigpen=info,warn");
        assert_eq!(default_directives(true), "pigpen=debug,warn");
    }
}
