//! In-memory dataset backend
//!
//! Programmatically populated backend used by the integration tests and for
//! embedding the exporter in other programs.

use crate::adapters::backend::traits::DatasetBackend;
use crate::domain::errors::BackendError;
use crate::domain::ids::{DatasetName, SeriesFid};
use crate::domain::series::{DataPoint, Metadata, Series};
use async_trait::async_trait;
use std::collections::HashMap;

/// Dataset backend holding everything in memory
///
/// # Examples
///
/// ```
/// use tsexport::adapters::backend::InMemoryBackend;
/// use tsexport::domain::{DatasetName, Series, SeriesFid};
///
/// let dsname = DatasetName::new("DS1").unwrap();
/// let backend = InMemoryBackend::new()
///     .with_series(&dsname, Series::new(SeriesFid::new("A").unwrap()));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    datasets: HashMap<DatasetName, Vec<Series>>,
}

impl InMemoryBackend {
    /// Creates an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a series to a dataset, creating the dataset if absent
    pub fn with_series(mut self, dataset: &DatasetName, series: Series) -> Self {
        self.datasets
            .entry(dataset.clone())
            .or_default()
            .push(series);
        self
    }

    /// Registers an empty dataset
    pub fn with_empty_dataset(mut self, dataset: &DatasetName) -> Self {
        self.datasets.entry(dataset.clone()).or_default();
        self
    }

    fn dataset(&self, dataset: &DatasetName) -> Result<&Vec<Series>, BackendError> {
        self.datasets
            .get(dataset)
            .ok_or_else(|| BackendError::DatasetNotFound(dataset.as_str().to_string()))
    }

    fn series(&self, dataset: &DatasetName, fid: &SeriesFid) -> Result<&Series, BackendError> {
        self.dataset(dataset)?
            .iter()
            .find(|series| &series.fid == fid)
            .ok_or_else(|| BackendError::SeriesNotFound(fid.as_str().to_string()))
    }
}

#[async_trait]
impl DatasetBackend for InMemoryBackend {
    async fn series_fids(&self, dataset: &DatasetName) -> Result<Vec<SeriesFid>, BackendError> {
        Ok(self
            .dataset(dataset)?
            .iter()
            .map(|series| series.fid.clone())
            .collect())
    }

    async fn metadata(
        &self,
        dataset: &DatasetName,
        fid: &SeriesFid,
    ) -> Result<Metadata, BackendError> {
        Ok(self.series(dataset, fid)?.metadata.clone())
    }

    async fn points(
        &self,
        dataset: &DatasetName,
        fid: &SeriesFid,
    ) -> Result<Vec<DataPoint>, BackendError> {
        Ok(self.series(dataset, fid)?.points.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (DatasetName, InMemoryBackend) {
        let dsname = DatasetName::new("DS1").unwrap();
        let mut series = Series::new(SeriesFid::new("A").unwrap());
        series.metadata.insert("city", "NY");
        series
            .points
            .push(DataPoint::from_epoch_ms(1_000_000_000_000, 5.0).unwrap());

        let backend = InMemoryBackend::new().with_series(&dsname, series);
        (dsname, backend)
    }

    #[tokio::test]
    async fn test_series_listing() {
        let (dsname, backend) = fixture();
        let fids = backend.series_fids(&dsname).await.unwrap();
        assert_eq!(fids.len(), 1);
        assert_eq!(fids[0].as_str(), "A");
    }

    #[tokio::test]
    async fn test_unknown_dataset_fails() {
        let (_, backend) = fixture();
        let unknown = DatasetName::new("NOPE").unwrap();
        let err = backend.series_fids(&unknown).await.unwrap_err();
        assert!(matches!(err, BackendError::DatasetNotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_series_fails() {
        let (dsname, backend) = fixture();
        let unknown = SeriesFid::new("Z").unwrap();
        let err = backend.metadata(&dsname, &unknown).await.unwrap_err();
        assert!(matches!(err, BackendError::SeriesNotFound(_)));
    }

    #[tokio::test]
    async fn test_metadata_and_points_fetch() {
        let (dsname, backend) = fixture();
        let fid = SeriesFid::new("A").unwrap();

        let metadata = backend.metadata(&dsname, &fid).await.unwrap();
        assert!(metadata.get("city").is_some());

        let points = backend.points(&dsname, &fid).await.unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].value, 5.0);
    }

    #[tokio::test]
    async fn test_empty_dataset_lists_no_series() {
        let dsname = DatasetName::new("EMPTY").unwrap();
        let backend = InMemoryBackend::new().with_empty_dataset(&dsname);
        assert!(backend.series_fids(&dsname).await.unwrap().is_empty());
    }
}
