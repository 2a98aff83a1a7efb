use std::path::Path;

use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with tracing.
///
/// Logs go to stderr so they never interleave with frames on stdout.
/// `verbose` raises this crate to debug; `RUST_LOG` overrides both. If
/// `log_dir` is provided, logs are also written to a daily rolling file
/// in that directory.
pub fn init_logging(log_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let default = if verbose {
        "pentavis=debug,warn"
    } else {
        "pentavis=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let registry = tracing_subscriber::registry().with(filter);
    let stderr_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    if let Some(dir) = log_dir {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "pentavis.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Keep the writer guard alive for the process lifetime; logging
        // is initialized exactly once.
        std::mem::forget(guard);

        registry
            .with(stderr_layer)
            .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
            .init();
    } else {
        registry.with(stderr_layer).init();
    }

    Ok(())
}
