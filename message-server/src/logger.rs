//! Logging for message-server.
//!
//! Request spans from the router, store events and startup progress all go through one
//! fmt layer, written to the console and appended to `LOG_FILE`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, fmt::writer::MakeWriterExt, layer::SubscriberExt,
    util::SubscriberInitExt, EnvFilter, Registry,
};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Sets up logging for `serve`. Call once, after `.env` is loaded so `RUST_LOG` applies.
///
/// Closed spans are logged, so each HTTP request yields one line with its latency.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let log_file = Arc::new(open_log_file(Path::new(log_file_path))?);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout.and(log_file))
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(false)
        .with_line_number(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Logging already initialized: {}", e))?;

    Ok(())
}

/// Opens `path` for appending; a missing parent directory (e.g. `logs/`) is created.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::open_log_file;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_directory_and_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("nested").join("server.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_without_subdirectory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("server.log");

        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
    }
}
