//! Destination path construction
//!
//! Applies the resolver to the user pattern, falls back to `{fid}.csv` when
//! the pattern cannot be resolved for a series, and sanitizes the result
//! into a filesystem-safe relative path that cannot escape the export root.

use crate::core::path::resolver::{resolve, ResolveContext};
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use std::path::PathBuf;

/// Fixed fallback pattern used when the user pattern cannot be resolved
/// for a series
///
/// Always resolvable because `fid` is a reserved keyword, and collision-free
/// across series of one dataset because `fid` is unique within it.
pub const FALLBACK_PATTERN: &str = "{fid}.csv";

/// Validates the user pattern before any I/O happens
///
/// An empty pattern, or one with an unterminated `{`, is a parameter error
/// that aborts the run up front. Missing metadata keys are not checked here:
/// those are per-series conditions handled by the fallback.
///
/// # Errors
///
/// Returns [`ExportError::Pattern`] describing the first syntax problem.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        return Err(ExportError::Pattern("pattern must not be empty".to_string()));
    }

    let mut rest = pattern;
    while let Some(open) = rest.find('{') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            return Err(ExportError::Pattern(format!(
                "unterminated placeholder starting at '{{{after_open}'"
            )));
        };
        rest = &after_open[close + 1..];
    }

    Ok(())
}

/// Builds the relative destination path for one series
///
/// Resolves `pattern` against the series context; on any resolution failure
/// (unknown metadata key, malformed placeholder) falls back deterministically
/// to [`FALLBACK_PATTERN`] resolved against the same context. The resolved
/// string is then split into segments independent of which separator
/// convention the pattern used, and each segment is sanitized:
///
/// - leading/trailing whitespace is trimmed
/// - empty segments are dropped (so `a//b` and `a/b` are the same path)
/// - `.` and `..` segments are replaced with `_` so metadata content can
///   never escape the export root
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tsexport::core::path::{build_path, ResolveContext};
/// use tsexport::domain::{DatasetName, Metadata, SeriesFid};
///
/// let fid = SeriesFid::new("A").unwrap();
/// let dsname = DatasetName::new("DS1").unwrap();
/// let metadata = Metadata::new();
/// let ctx = ResolveContext::new(&fid, &dsname, &metadata);
///
/// // `{city}` is absent from metadata, so the series falls back to {fid}.csv
/// let path = build_path("{DSname}/{city}.csv", &ctx);
/// assert_eq!(path, PathBuf::from("A.csv"));
/// ```
pub fn build_path(pattern: &str, ctx: &ResolveContext<'_>) -> PathBuf {
    let resolved = match resolve(pattern, ctx) {
        Ok(resolved) => resolved,
        Err(reason) => {
            tracing::debug!(
                fid = %ctx.fid,
                pattern = %pattern,
                reason = %reason,
                "Pattern did not resolve for series, using fallback"
            );
            match resolve(FALLBACK_PATTERN, ctx) {
                Ok(resolved) => resolved,
                // Unreachable: the fallback only references the reserved
                // `fid` keyword, which the context always supplies.
                Err(_) => format!("{}.csv", ctx.fid),
            }
        }
    };

    sanitize_segments(&resolved)
}

/// Splits a resolved string on either separator convention and sanitizes
/// each directory segment
fn sanitize_segments(resolved: &str) -> PathBuf {
    let mut path = PathBuf::new();

    for segment in resolved.split(['/', '\\']) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if segment == "." || segment == ".." {
            path.push("_");
            continue;
        }
        path.push(segment);
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{DatasetName, SeriesFid};
    use crate::domain::series::Metadata;
    use test_case::test_case;

    fn fixture() -> (SeriesFid, DatasetName, Metadata) {
        let fid = SeriesFid::new("FID_TS_1").unwrap();
        let dsname = DatasetName::new("DS1").unwrap();
        let mut metadata = Metadata::new();
        metadata.insert("city", "NY");
        (fid, dsname, metadata)
    }

    #[test]
    fn test_validate_pattern_rejects_empty() {
        assert!(matches!(validate_pattern(""), Err(ExportError::Pattern(_))));
        assert!(matches!(validate_pattern("  "), Err(ExportError::Pattern(_))));
    }

    #[test]
    fn test_validate_pattern_rejects_unterminated() {
        let err = validate_pattern("{DSname}/{fid.csv").unwrap_err();
        assert!(matches!(err, ExportError::Pattern(_)));
    }

    #[test]
    fn test_validate_pattern_accepts_defaults() {
        validate_pattern("{DSname}/{fid}.csv").unwrap();
        validate_pattern(FALLBACK_PATTERN).unwrap();
        validate_pattern("no_placeholders.csv").unwrap();
    }

    #[test]
    fn test_build_path_substitutes_metadata() {
        let (fid, dsname, metadata) = fixture();
        let ctx = ResolveContext::new(&fid, &dsname, &metadata);

        let path = build_path("{DSname}/{city}.csv", &ctx);
        assert_eq!(path, PathBuf::from("DS1/NY.csv"));
    }

    #[test]
    fn test_build_path_fallback_matches_explicit_fallback() {
        let (fid, dsname, metadata) = fixture();
        let ctx = ResolveContext::new(&fid, &dsname, &metadata);

        let via_fallback = build_path("{DSname}/{missing_key}.csv", &ctx);
        let direct = build_path(FALLBACK_PATTERN, &ctx);
        assert_eq!(via_fallback, direct);
        assert_eq!(via_fallback, PathBuf::from("FID_TS_1.csv"));
    }

    #[test]
    fn test_build_path_fallback_on_malformed_placeholder() {
        let (fid, dsname, metadata) = fixture();
        let ctx = ResolveContext::new(&fid, &dsname, &metadata);

        let path = build_path("{city/output.csv", &ctx);
        assert_eq!(path, PathBuf::from("FID_TS_1.csv"));
    }

    #[test_case("a//b/c.csv", &["a", "b", "c.csv"] ; "empty segment dropped")]
    #[test_case("a\\b/c.csv", &["a", "b", "c.csv"] ; "backslash separates too")]
    #[test_case(" a / b .csv", &["a", "b .csv"] ; "segments trimmed")]
    #[test_case("../escape.csv", &["_", "escape.csv"] ; "dotdot replaced")]
    #[test_case("./x/./y.csv", &["_", "x", "_", "y.csv"] ; "dot replaced")]
    fn test_sanitize_segments(resolved: &str, expected: &[&str]) {
        let expected: PathBuf = expected.iter().collect();
        assert_eq!(sanitize_segments(resolved), expected);
    }

    #[test]
    fn test_build_path_contains_traversal_from_metadata() {
        let fid = SeriesFid::new("A").unwrap();
        let dsname = DatasetName::new("DS1").unwrap();
        let mut metadata = Metadata::new();
        metadata.insert("city", "..");
        let ctx = ResolveContext::new(&fid, &dsname, &metadata);

        let path = build_path("{city}/{fid}.csv", &ctx);
        assert_eq!(path, PathBuf::from("_/A.csv"));
    }

    #[test]
    fn test_build_path_literal_pattern() {
        let (fid, dsname, metadata) = fixture();
        let ctx = ResolveContext::new(&fid, &dsname, &metadata);

        let path = build_path("fixed/name.csv", &ctx);
        assert_eq!(path, PathBuf::from("fixed/name.csv"));
    }
}
