// ============================================================
// RUN LOG
// ============================================================
// Append-only plain-text log files (general + error), one line per event

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{error, info};

/// Writer for the two append-only log files.
///
/// Writes are synchronous and best-effort: the pipeline never fails
/// because a log line could not be written. Every event is mirrored to
/// the console through tracing.
pub struct RunLog {
    log_path: PathBuf,
    error_log_path: PathBuf,
}

impl RunLog {
    pub fn new(log_path: &Path, error_log_path: &Path) -> Self {
        Self {
            log_path: log_path.to_path_buf(),
            error_log_path: error_log_path.to_path_buf(),
        }
    }

    /// Append a timestamped line to the general log.
    pub fn info(&self, message: &str) {
        info!("{}", message);
        Self::append_line(&self.log_path, &format!("{} {}", Self::timestamp(), message));
    }

    /// Append a timestamped, `ERROR:`-prefixed line to the error log.
    pub fn error(&self, message: &str) {
        error!("{}", message);
        Self::append_line(
            &self.error_log_path,
            &format!("{} ERROR: {}", Self::timestamp(), message),
        );
    }

    fn timestamp() -> String {
        Local::now().to_rfc3339()
    }

    fn append_line(path: &Path, line: &str) {
        let file = OpenOptions::new().create(true).append(true).open(path);
        if let Ok(mut file) = file {
            let _ = writeln!(file, "{}", line);
        }
    }
}
