//! Run-scoped collision detection
//!
//! Two series silently overwriting each other's CSV would lose data, so the
//! policy is fail-fast: the first duplicate registration aborts the whole
//! run. One guard instance is owned by one export run and shared with its
//! workers; there is no process-wide state.

use crate::domain::errors::ExportError;
use crate::domain::ids::SeriesFid;
use crate::domain::result::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Tracks every destination path registered during one export run
///
/// `register` is an atomic check-and-insert: with concurrent workers, at
/// most one registration of a given path succeeds and every other caller
/// observes [`ExportError::DuplicatePath`] naming both series.
#[derive(Debug, Default)]
pub struct CollisionGuard {
    // Path -> series that registered it first. The mutex is the single
    // synchronization point of a run; the critical section is one map probe.
    seen: Mutex<HashMap<PathBuf, SeriesFid>>,
}

impl CollisionGuard {
    /// Creates an empty guard for a new export run
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resolved path for a series
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::DuplicatePath`] if another series already
    /// registered the same path in this run.
    pub fn register(&self, path: &Path, fid: &SeriesFid) -> Result<()> {
        let mut seen = self
            .seen
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if let Some(first) = seen.get(path) {
            return Err(ExportError::DuplicatePath {
                path: path.to_path_buf(),
                first: first.clone(),
                second: fid.clone(),
            });
        }

        seen.insert(path.to_path_buf(), fid.clone());
        Ok(())
    }

    /// Number of paths registered so far
    pub fn len(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Returns true if no paths have been registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_register_distinct_paths() {
        let guard = CollisionGuard::new();
        let a = SeriesFid::new("A").unwrap();
        let b = SeriesFid::new("B").unwrap();

        guard.register(Path::new("ds1/ny.csv"), &a).unwrap();
        guard.register(Path::new("ds1/la.csv"), &b).unwrap();
        assert_eq!(guard.len(), 2);
    }

    #[test]
    fn test_register_duplicate_reports_both_series() {
        let guard = CollisionGuard::new();
        let a = SeriesFid::new("A").unwrap();
        let b = SeriesFid::new("B").unwrap();

        guard.register(Path::new("ds1/ny.csv"), &a).unwrap();
        let err = guard.register(Path::new("ds1/ny.csv"), &b).unwrap_err();

        match err {
            ExportError::DuplicatePath { path, first, second } => {
                assert_eq!(path, PathBuf::from("ds1/ny.csv"));
                assert_eq!(first.as_str(), "A");
                assert_eq!(second.as_str(), "B");
            }
            other => panic!("expected DuplicatePath, got {other:?}"),
        }
    }

    #[test]
    fn test_same_series_registering_twice_still_collides() {
        // A path is a path: even re-registration by the same fid is a bug
        // upstream and must not pass.
        let guard = CollisionGuard::new();
        let a = SeriesFid::new("A").unwrap();

        guard.register(Path::new("a.csv"), &a).unwrap();
        assert!(guard.register(Path::new("a.csv"), &a).is_err());
    }

    #[test]
    fn test_concurrent_registration_admits_exactly_one() {
        let guard = Arc::new(CollisionGuard::new());
        let mut handles = Vec::new();

        for i in 0..16 {
            let guard = Arc::clone(&guard);
            handles.push(std::thread::spawn(move || {
                let fid = SeriesFid::new(format!("S{i}")).unwrap();
                guard.register(Path::new("contended.csv"), &fid).is_ok()
            }));
        }

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(guard.len(), 1);
    }
}
