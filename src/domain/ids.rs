//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for dataset and series identifiers.
//! Each type ensures type safety and rejects empty values at construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dataset name newtype wrapper
///
/// Identifies a dataset in the backing store. The name also determines the
/// export root directory (lowercased) under the base storage directory.
///
/// # Examples
///
/// ```
/// use tsexport::domain::ids::DatasetName;
/// use std::str::FromStr;
///
/// let dsname = DatasetName::from_str("PORTFOLIO").unwrap();
/// assert_eq!(dsname.as_str(), "PORTFOLIO");
/// assert_eq!(dsname.export_dir_name(), "portfolio");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct DatasetName(String);

impl DatasetName {
    /// Creates a new DatasetName from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or whitespace-only
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Dataset name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the dataset name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Directory name for this dataset's export root, relative to the
    /// base storage directory
    pub fn export_dir_name(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatasetName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DatasetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DatasetName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Series functional identifier newtype wrapper
///
/// Identifies one timeseries within a dataset. Unique per dataset, and the
/// reason the `{fid}.csv` fallback pattern can never collide between two
/// distinct series.
///
/// # Examples
///
/// ```
/// use tsexport::domain::ids::SeriesFid;
/// use std::str::FromStr;
///
/// let fid = SeriesFid::from_str("WS1_FLIGHT_7").unwrap();
/// assert_eq!(fid.as_str(), "WS1_FLIGHT_7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct SeriesFid(String);

impl SeriesFid {
    /// Creates a new SeriesFid from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only
    pub fn new(fid: impl Into<String>) -> Result<Self, String> {
        let fid = fid.into();
        if fid.trim().is_empty() {
            return Err("Series functional identifier cannot be empty".to_string());
        }
        Ok(Self(fid))
    }

    /// Returns the functional identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SeriesFid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeriesFid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SeriesFid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SeriesFid {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
