//! Placeholder resolution
//!
//! Substitutes `{keyword}` tokens in a path template. Lookup order is the
//! reserved keywords first (`fid`, `DSname`, supplied by the driver for the
//! current series and dataset), then the series metadata mapping. Resolution
//! is all-or-nothing: a single unknown keyword or an unterminated `{` fails
//! the whole template, and the caller decides what to do with that (for the
//! path builder, fall back to `{fid}.csv`).

use crate::domain::ids::{DatasetName, SeriesFid};
use crate::domain::series::Metadata;
use thiserror::Error;

/// Reserved placeholder for the series functional identifier
pub const KEYWORD_FID: &str = "fid";

/// Reserved placeholder for the dataset name
pub const KEYWORD_DSNAME: &str = "DSname";

/// Why a template could not be resolved
///
/// This is a signal for the caller, not a run failure; the path builder
/// recovers from it by switching to the fallback pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A placeholder names neither a reserved keyword nor a metadata key
    #[error("unknown placeholder '{{{0}}}'")]
    MissingKey(String),

    /// A `{` has no matching `}`
    #[error("unterminated placeholder starting at '{{{0}'")]
    Unterminated(String),
}

/// Resolution context for one series
///
/// Bundles the driver-supplied reserved values with the series metadata.
/// The reserved values are rendered through the same sanitizer as metadata
/// values so a hostile `fid` cannot smuggle path separators into a single
/// segment.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Functional identifier of the series being resolved
    pub fid: &'a SeriesFid,

    /// Name of the dataset being exported
    pub dsname: &'a DatasetName,

    /// Series metadata mapping
    pub metadata: &'a Metadata,
}

impl<'a> ResolveContext<'a> {
    /// Creates a resolution context for one series of one dataset
    pub fn new(fid: &'a SeriesFid, dsname: &'a DatasetName, metadata: &'a Metadata) -> Self {
        Self {
            fid,
            dsname,
            metadata,
        }
    }

    /// Looks up a placeholder value: reserved keywords first, then metadata
    fn lookup(&self, name: &str) -> Option<String> {
        match name {
            KEYWORD_FID => Some(self.fid.as_str().to_string()),
            KEYWORD_DSNAME => Some(self.dsname.as_str().to_string()),
            _ => self.metadata.get(name).map(|value| value.to_path_string()),
        }
    }
}

/// Resolves a path template against a series context
///
/// Scans `template` for `{name}` tokens and substitutes each from the
/// context. Placeholder names are matched literally: no nesting, no escape
/// mechanism. A `}` without a preceding `{` passes through as a literal
/// character. Substituted values are sanitized so that path separators,
/// NUL and other control bytes inside a value cannot alter the directory
/// structure of the resolved path.
///
/// # Errors
///
/// Returns [`ResolveError::MissingKey`] if a placeholder is neither
/// reserved nor present in the metadata, and [`ResolveError::Unterminated`]
/// if a `{` has no closing `}`. No partial substitution is retained.
///
/// # Examples
///
/// ```
/// use tsexport::core::path::{resolve, ResolveContext};
/// use tsexport::domain::{DatasetName, Metadata, SeriesFid};
///
/// let fid = SeriesFid::new("A").unwrap();
/// let dsname = DatasetName::new("DS1").unwrap();
/// let mut metadata = Metadata::new();
/// metadata.insert("city", "NY");
///
/// let ctx = ResolveContext::new(&fid, &dsname, &metadata);
/// let resolved = resolve("{DSname}/{city}.csv", &ctx).unwrap();
/// assert_eq!(resolved, "DS1/NY.csv");
/// ```
pub fn resolve(template: &str, ctx: &ResolveContext<'_>) -> Result<String, ResolveError> {
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        resolved.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            return Err(ResolveError::Unterminated(after_open.to_string()));
        };

        let name = &after_open[..close];
        let value = ctx
            .lookup(name)
            .ok_or_else(|| ResolveError::MissingKey(name.to_string()))?;
        resolved.push_str(&sanitize_value(&value));

        rest = &after_open[close + 1..];
    }

    resolved.push_str(rest);
    Ok(resolved)
}

/// Replaces characters in a substituted value that would alter path
/// structure or are illegal in file names
///
/// The policy is a fixed `_` replacement, never a silent drop, so the
/// resulting paths stay predictable.
fn sanitize_value(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
