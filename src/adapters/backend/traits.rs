//! Dataset backend abstraction
//!
//! This module defines the trait that dataset backends must implement to
//! supply series to the export driver.

use crate::domain::errors::BackendError;
use crate::domain::ids::{DatasetName, SeriesFid};
use crate::domain::series::{DataPoint, Metadata};
use async_trait::async_trait;

/// Dataset backend trait
///
/// The driver calls this per run (series listing) and per series (metadata
/// and points). Implementations must be shareable across worker tasks.
///
/// # Errors
///
/// Every method returns [`BackendError`] on failure; the driver propagates
/// it unchanged and aborts the run.
#[async_trait]
pub trait DatasetBackend: Send + Sync {
    /// Lists the functional identifiers of all series in a dataset
    ///
    /// An existing but empty dataset yields an empty list, which the driver
    /// treats as a successful no-op export.
    async fn series_fids(&self, dataset: &DatasetName) -> Result<Vec<SeriesFid>, BackendError>;

    /// Fetches the metadata mapping of one series
    async fn metadata(
        &self,
        dataset: &DatasetName,
        fid: &SeriesFid,
    ) -> Result<Metadata, BackendError>;

    /// Fetches the time-ordered points of one series
    async fn points(
        &self,
        dataset: &DatasetName,
        fid: &SeriesFid,
    ) -> Result<Vec<DataPoint>, BackendError>;
}
