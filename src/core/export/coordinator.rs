//! Export driver - main orchestrator for the export run
//!
//! One coordinator drives one run: validate the pattern, create the export
//! root, then process every series of the dataset through path building,
//! collision registration and CSV writing. Per-series work is independent
//! and runs on a bounded worker pool; the collision guard is the only
//! shared mutable state. The first fatal error stops admission of new
//! series tasks, cancels the in-flight ones, and aborts the run with that
//! error. There is no partial-success result.

use crate::adapters::backend::DatasetBackend;
use crate::core::export::summary::ExportOutcome;
use crate::core::export::writer::write_csv;
use crate::core::path::{build_path, validate_pattern, CollisionGuard, ResolveContext};
use crate::domain::errors::ExportError;
use crate::domain::ids::{DatasetName, SeriesFid};
use crate::domain::Result;
use futures::stream::{self, TryStreamExt};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Default destination pattern
pub const DEFAULT_PATTERN: &str = "{DSname}/{fid}.csv";

/// Default worker pool size for per-series tasks
pub const DEFAULT_WORKERS: usize = 8;

/// Export run coordinator
pub struct ExportCoordinator {
    backend: Arc<dyn DatasetBackend>,
    base_dir: PathBuf,
    pattern: String,
    workers: usize,
    overwrite: bool,
}

impl ExportCoordinator {
    /// Creates a coordinator with the default pattern and worker pool
    ///
    /// `base_dir` is the well-known base storage directory; every export
    /// root is created beneath it and reported relative to it.
    pub fn new(backend: Arc<dyn DatasetBackend>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            base_dir: base_dir.into(),
            pattern: DEFAULT_PATTERN.to_string(),
            workers: DEFAULT_WORKERS,
            overwrite: false,
        }
    }

    /// Sets the destination pattern for this run
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Sets the worker pool size (clamped to at least 1)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Allows exporting into a non-empty pre-existing root
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Executes the export run for one dataset
    ///
    /// Run phases:
    /// 1. Validate the pattern and create the export root
    /// 2. Fetch the series listing from the backend
    /// 3. Per series (concurrently): fetch metadata and points, build the
    ///    destination path, register it with the collision guard, write
    /// 4. Finalize with an [`ExportOutcome`] naming the root relative to
    ///    the base storage directory
    ///
    /// # Errors
    ///
    /// Any [`ExportError`] other than a per-series resolution failure
    /// (which is absorbed by the fallback) aborts the whole run: duplicate
    /// paths, I/O failures, backend failures, invalid pattern.
    pub async fn execute_export(&self, dataset: &DatasetName) -> Result<ExportOutcome> {
        let start_time = Instant::now();

        // Init
        validate_pattern(&self.pattern)?;
        let root_rel = PathBuf::from(dataset.export_dir_name());
        let root_abs = self.base_dir.join(&root_rel);
        self.prepare_root(&root_abs)?;

        tracing::info!(
            dataset = %dataset,
            pattern = %self.pattern,
            root = %root_abs.display(),
            workers = self.workers,
            "Starting export run"
        );

        // Iterating
        let fids = self.backend.series_fids(dataset).await?;
        if fids.is_empty() {
            tracing::warn!(dataset = %dataset, "Dataset is empty or unknown to the backend");
            return Ok(ExportOutcome::new(root_rel, 0, 0, start_time.elapsed()));
        }

        let series_count = fids.len();
        let guard = Arc::new(CollisionGuard::new());
        let points_total = Arc::new(AtomicU64::new(0));
        let workers = self.workers.min(series_count);

        stream::iter(fids.into_iter().map(Ok::<_, ExportError>))
            .try_for_each_concurrent(workers, |fid| {
                let guard = Arc::clone(&guard);
                let points_total = Arc::clone(&points_total);
                let root_abs = &root_abs;
                async move {
                    self.export_series(dataset, &fid, root_abs, &guard, &points_total)
                        .await
                }
            })
            .await?;

        // Finalizing
        let outcome = ExportOutcome::new(
            root_rel,
            series_count,
            points_total.load(Ordering::Relaxed),
            start_time.elapsed(),
        );
        outcome.log_summary();
        Ok(outcome)
    }

    /// Creates the export root, refusing a non-empty one unless overwrite
    /// was requested
    fn prepare_root(&self, root_abs: &Path) -> Result<()> {
        if root_abs.is_dir() && !self.overwrite {
            let mut entries = std::fs::read_dir(root_abs).map_err(|e| ExportError::Io {
                path: root_abs.to_path_buf(),
                message: e.to_string(),
            })?;
            if entries.next().is_some() {
                return Err(ExportError::Validation(format!(
                    "Refusing to export into non-empty directory '{}' (pass overwrite to allow)",
                    root_abs.display()
                )));
            }
        }

        std::fs::create_dir_all(root_abs).map_err(|e| ExportError::Io {
            path: root_abs.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Processes one series end to end
    async fn export_series(
        &self,
        dataset: &DatasetName,
        fid: &SeriesFid,
        root_abs: &Path,
        guard: &CollisionGuard,
        points_total: &AtomicU64,
    ) -> Result<()> {
        tracing::debug!(dataset = %dataset, fid = %fid, "Processing series");

        let metadata = self.backend.metadata(dataset, fid).await?;
        let ctx = ResolveContext::new(fid, dataset, &metadata);
        let rel_path = build_path(&self.pattern, &ctx);

        guard.register(&rel_path, fid)?;

        let points = self.backend.points(dataset, fid).await?;
        write_csv(&root_abs.join(&rel_path), &points).await?;
        points_total.fetch_add(points.len() as u64, Ordering::Relaxed);

        tracing::debug!(
            fid = %fid,
            path = %rel_path.display(),
            points = points.len(),
            "Series exported"
        );
        Ok(())
    }
}
