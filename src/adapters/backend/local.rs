//! Local JSON dataset backend
//!
//! Stores each dataset as one JSON document `<data_dir>/<dsname>.json`:
//!
//! ```json
//! {
//!   "series": [
//!     {
//!       "fid": "FID_TS_1",
//!       "metadata": { "city": "NY", "qual_nb_points": 14 },
//!       "points": [[1000000000000, 5.0], [1000000001000, 6.2]]
//!     }
//!   ]
//! }
//! ```
//!
//! Points are `[epoch_milliseconds, value]` pairs.

use crate::adapters::backend::traits::DatasetBackend;
use crate::domain::errors::BackendError;
use crate::domain::ids::{DatasetName, SeriesFid};
use crate::domain::series::{DataPoint, Metadata};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Dataset backend reading JSON documents from a local directory
#[derive(Debug, Clone)]
pub struct LocalJsonBackend {
    data_dir: PathBuf,
}

/// On-disk dataset document
#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    series: Vec<RawSeries>,
}

/// On-disk series entry
#[derive(Debug, Deserialize)]
struct RawSeries {
    fid: SeriesFid,

    #[serde(default)]
    metadata: Metadata,

    #[serde(default)]
    points: Vec<(i64, f64)>,
}

impl LocalJsonBackend {
    /// Creates a backend rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the document backing one dataset
    fn dataset_path(&self, dataset: &DatasetName) -> PathBuf {
        self.data_dir.join(format!("{}.json", dataset.as_str()))
    }

    /// Loads and decodes one dataset document
    async fn load(&self, dataset: &DatasetName) -> Result<RawDataset, BackendError> {
        let path = self.dataset_path(dataset);

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BackendError::DatasetNotFound(dataset.as_str().to_string()));
            }
            Err(e) => {
                return Err(BackendError::ReadFailed(format!(
                    "{}: {}",
                    path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            BackendError::InvalidData(format!("{}: {}", path.display(), e))
        })
    }

    /// Finds one series entry in a loaded document
    fn find_series(raw: RawDataset, fid: &SeriesFid) -> Result<RawSeries, BackendError> {
        raw.series
            .into_iter()
            .find(|series| &series.fid == fid)
            .ok_or_else(|| BackendError::SeriesNotFound(fid.as_str().to_string()))
    }

    /// Converts raw epoch-millisecond pairs to domain points
    fn decode_points(path_hint: &Path, raw: Vec<(i64, f64)>) -> Result<Vec<DataPoint>, BackendError> {
        raw.into_iter()
            .map(|(epoch_ms, value)| {
                DataPoint::from_epoch_ms(epoch_ms, value).ok_or_else(|| {
                    BackendError::InvalidData(format!(
                        "{}: timestamp {} out of range",
                        path_hint.display(),
                        epoch_ms
                    ))
                })
            })
            .collect()
    }
}

#[async_trait]
impl DatasetBackend for LocalJsonBackend {
    async fn series_fids(&self, dataset: &DatasetName) -> Result<Vec<SeriesFid>, BackendError> {
        let raw = self.load(dataset).await?;
        Ok(raw.series.into_iter().map(|series| series.fid).collect())
    }

    async fn metadata(
        &self,
        dataset: &DatasetName,
        fid: &SeriesFid,
    ) -> Result<Metadata, BackendError> {
        let raw = self.load(dataset).await?;
        Ok(Self::find_series(raw, fid)?.metadata)
    }

    async fn points(
        &self,
        dataset: &DatasetName,
        fid: &SeriesFid,
    ) -> Result<Vec<DataPoint>, BackendError> {
        let raw = self.load(dataset).await?;
        let series = Self::find_series(raw, fid)?;
        Self::decode_points(&self.dataset_path(dataset), series.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "series": [
            {
                "fid": "FID_TS_1",
                "metadata": { "city": "NY", "qual_nb_points": 2 },
                "points": [[1000000000000, 5.0], [1000000001000, 6.2]]
            },
            { "fid": "FID_TS_2" }
        ]
    }"#;

    fn write_dataset(dir: &Path, dsname: &str, contents: &str) {
        std::fs::write(dir.join(format!("{dsname}.json")), contents).unwrap();
    }

    #[tokio::test]
    async fn test_series_listing() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), "DS1", DOC);
        let backend = LocalJsonBackend::new(dir.path());

        let dsname = DatasetName::new("DS1").unwrap();
        let fids = backend.series_fids(&dsname).await.unwrap();
        assert_eq!(fids.len(), 2);
        assert_eq!(fids[0].as_str(), "FID_TS_1");
    }

    #[tokio::test]
    async fn test_missing_document_is_dataset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let backend = LocalJsonBackend::new(dir.path());

        let dsname = DatasetName::new("DS1").unwrap();
        let err = backend.series_fids(&dsname).await.unwrap_err();
        assert!(matches!(err, BackendError::DatasetNotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), "DS1", "not json");
        let backend = LocalJsonBackend::new(dir.path());

        let dsname = DatasetName::new("DS1").unwrap();
        let err = backend.series_fids(&dsname).await.unwrap_err();
        assert!(matches!(err, BackendError::InvalidData(_)));
    }

    #[tokio::test]
    async fn test_empty_fid_in_document_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), "DS1", r#"{ "series": [ { "fid": "" } ] }"#);
        let backend = LocalJsonBackend::new(dir.path());

        let dsname = DatasetName::new("DS1").unwrap();
        let err = backend.series_fids(&dsname).await.unwrap_err();
        assert!(matches!(err, BackendError::InvalidData(_)));
    }

    #[tokio::test]
    async fn test_metadata_and_points_decode() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), "DS1", DOC);
        let backend = LocalJsonBackend::new(dir.path());

        let dsname = DatasetName::new("DS1").unwrap();
        let fid = SeriesFid::new("FID_TS_1").unwrap();

        let metadata = backend.metadata(&dsname, &fid).await.unwrap();
        assert_eq!(metadata.get("city").unwrap().to_path_string(), "NY");

        let points = backend.points(&dsname, &fid).await.unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].timestamp.timestamp_millis(), 1_000_000_000_000);
        assert_eq!(points[1].value, 6.2);
    }

    #[tokio::test]
    async fn test_series_without_points_or_metadata() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), "DS1", DOC);
        let backend = LocalJsonBackend::new(dir.path());

        let dsname = DatasetName::new("DS1").unwrap();
        let fid = SeriesFid::new("FID_TS_2").unwrap();

        assert!(backend.metadata(&dsname, &fid).await.unwrap().is_empty());
        assert!(backend.points(&dsname, &fid).await.unwrap().is_empty());
    }
}
