//! Export run outcome
//!
//! The result of a successful run: where the files landed (relative to the
//! base storage directory) and how much was written.

use std::path::PathBuf;
use std::time::Duration;

/// Outcome of a completed export run
///
/// Only produced when every series succeeded; an aborted run yields an
/// error instead, never a partial outcome.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Export root directory, relative to the base storage directory
    pub root: PathBuf,

    /// Number of series exported
    pub series_count: usize,

    /// Total number of points written across all series
    pub points_count: u64,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportOutcome {
    /// Creates an outcome for a finished run
    pub fn new(root: PathBuf, series_count: usize, points_count: u64, duration: Duration) -> Self {
        Self {
            root,
            series_count,
            points_count,
            duration,
        }
    }

    /// Logs the outcome at info level
    pub fn log_summary(&self) {
        tracing::info!(
            root = %self.root.display(),
            series = self.series_count,
            points = self.points_count,
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_fields() {
        let outcome = ExportOutcome::new(
            PathBuf::from("test_export_data"),
            3,
            42,
            Duration::from_millis(120),
        );
        assert_eq!(outcome.root, PathBuf::from("test_export_data"));
        assert_eq!(outcome.series_count, 3);
        assert_eq!(outcome.points_count, 42);
        assert_eq!(outcome.duration, Duration::from_millis(120));
    }
}
