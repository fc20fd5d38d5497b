//! Series domain model
//!
//! One timeseries is identified by a functional identifier, carries a
//! key-value metadata mapping, and owns a time-ordered sequence of points.
//! The export core only ever holds a read-only view of a series while it is
//! being processed.

use crate::domain::ids::SeriesFid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A scalar metadata value
///
/// Metadata values are either text or numbers. The rendering used for path
/// building is canonical and locale-independent so that repeated runs on the
/// same data produce identical paths: integers carry no trailing `.0`, and a
/// float with a zero fractional part renders as an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Integer scalar
    Integer(i64),
    /// Floating point scalar
    Float(f64),
    /// Text scalar
    Text(String),
}

impl MetaValue {
    /// Canonical string rendering used when the value is substituted into
    /// a destination path
    pub fn to_path_string(&self) -> String {
        match self {
            MetaValue::Text(s) => s.clone(),
            MetaValue::Integer(n) => n.to_string(),
            MetaValue::Float(f) => {
                // Whole-valued floats render without a fractional part, so
                // a backend storing `14` as `14.0` still yields "14".
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
                    format!("{}", *f as i64)
                } else {
                    format!("{f}")
                }
            }
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path_string())
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Text(s.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::Text(s)
    }
}

impl From<i64> for MetaValue {
    fn from(n: i64) -> Self {
        MetaValue::Integer(n)
    }
}

impl From<f64> for MetaValue {
    fn from(f: f64) -> Self {
        MetaValue::Float(f)
    }
}

/// Metadata mapping of a series
///
/// Wraps a string-keyed map of scalar values. Lookup is explicit
/// present/absent via [`Metadata::get`] and never panics; a missing key is
/// an ordinary control-flow path for the resolver's fallback branch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, MetaValue>);

impl Metadata {
    /// Creates an empty metadata mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a metadata value by key
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.0.get(key)
    }

    /// Inserts a metadata value, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Option<MetaValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns true if the mapping holds no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys in the mapping
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, MetaValue)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, MetaValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One observation of a timeseries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Observation timestamp (UTC, millisecond precision in CSV output)
    pub timestamp: DateTime<Utc>,

    /// Observed value
    pub value: f64,
}

impl DataPoint {
    /// Creates a point from an epoch-milliseconds timestamp
    ///
    /// Returns `None` if the timestamp is outside the representable range.
    pub fn from_epoch_ms(epoch_ms: i64, value: f64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(epoch_ms)
            .map(|timestamp| Self { timestamp, value })
    }
}

/// One timeseries: identity, metadata, and time-ordered points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    /// Functional identifier, unique within the dataset
    pub fid: SeriesFid,

    /// Key-value metadata (keys not guaranteed present)
    #[serde(default)]
    pub metadata: Metadata,

    /// Time-ordered (timestamp, value) points
    #[serde(default)]
    pub points: Vec<DataPoint>,
}

impl Series {
    /// Creates a series with empty metadata and no points
    pub fn new(fid: SeriesFid) -> Self {
        Self {
            fid,
            metadata: Metadata::new(),
            points: Vec::new(),
        }
    }
}
