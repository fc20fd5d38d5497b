//! CSV file writing
//!
//! One file per series, two `;`-delimited columns, no header row:
//!
//! ```text
//! 2001-09-09T01:46:40.000;5
//! 2001-09-09T01:46:41.000;6.2
//! ```
//!
//! Timestamps are ISO-8601 with millisecond precision. A pre-existing file
//! is overwritten: same-run duplicates are excluded by the collision guard
//! before a writer is ever invoked, and cross-run overwrite is accepted
//! behavior.

use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use crate::domain::series::DataPoint;
use std::path::Path;

/// Timestamp format written to the first CSV column
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Column delimiter
const DELIMITER: char = ';';

/// Writes the points of one series to `path`
///
/// Missing parent directories are created first. Directory creation is
/// idempotent, so concurrent workers writing siblings under the same parent
/// do not race each other.
///
/// # Errors
///
/// Returns [`ExportError::Io`] carrying the offending path if directory
/// creation or the file write fails.
pub async fn write_csv(path: &Path, points: &[DataPoint]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| ExportError::Io {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    tokio::fs::write(path, format_lines(points))
        .await
        .map_err(|e| ExportError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), points = points.len(), "Series written");
    Ok(())
}

/// Renders all points of a series into the file contents
fn format_lines(points: &[DataPoint]) -> String {
    let mut contents = String::with_capacity(points.len() * 32);
    for point in points {
        contents.push_str(&point.timestamp.format(TIMESTAMP_FORMAT).to_string());
        contents.push(DELIMITER);
        contents.push_str(&format!("{}", point.value));
        contents.push('\n');
    }
    contents
}
