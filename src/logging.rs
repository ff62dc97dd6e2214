//! File logging
//!
//! The TUI owns stdout, so events go to `<data dir>/labourdesk.log`.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "LABOURDESK_LOG";
pub const DEFAULT_FILTER: &str = "labourdesk=info";

/// Install the global subscriber writing to `path`. The returned guard
/// flushes pending lines on drop and must outlive the app. Returns `None`
/// when the log file cannot be set up; the app runs without logs then.
pub fn init_logging(path: &Path) -> Option<WorkerGuard> {
    let dir = path.parent()?;
    let file_name = path.file_name()?;
    fs::create_dir_all(dir).ok()?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .ok()?;

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unopenable_log_file_disables_logging() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("labourdesk.log");
        // a directory where the log file should be
        fs::create_dir(&path).unwrap();

        assert!(init_logging(&path).is_none());
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        assert!(init_logging(Path::new("/")).is_none());
    }
}
