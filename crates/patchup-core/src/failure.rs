//! Worker error taxonomy and the disposed-resource classifier.
//!
//! Concurrent update operations surface their failures together as an
//! [`AggregateFailure`]. When the worker's resources are torn down mid-run
//! (user cancelled, window closed), the in-flight operations fail with
//! [`WorkerError::ResourceDisposed`]; the classifier recognizes that kind so
//! orchestration can treat the whole batch as a benign cancellation instead
//! of reporting it to the user. Any other kind is opaque here and must be
//! propagated unchanged by the caller.

use std::fmt;

use thiserror::Error;

use crate::metadata::MetadataError;

/// Error surfaced by a single worker operation.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// Operation attempted on an already-released resource. Expected fallout
    /// of cancellation, not a genuine error.
    #[error("resource released before the operation completed")]
    ResourceDisposed,
    /// Patch server answered with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Stream or storage failure.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// Server metadata failed the sanity check.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// Ordered batch of failures from concurrently executing operations.
///
/// Immutable once constructed; the classifier only inspects it.
#[derive(Debug, Default)]
pub struct AggregateFailure {
    failures: Vec<WorkerError>,
}

impl AggregateFailure {
    pub fn new(failures: Vec<WorkerError>) -> Self {
        Self { failures }
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Iterates the underlying failures in the order they were collected.
    pub fn iter(&self) -> std::slice::Iter<'_, WorkerError> {
        self.failures.iter()
    }

    /// True if at least one underlying failure is
    /// [`WorkerError::ResourceDisposed`]. False for an empty batch.
    pub fn contains_resource_disposed(&self) -> bool {
        self.failures
            .iter()
            .any(|f| matches!(f, WorkerError::ResourceDisposed))
    }
}

impl From<Vec<WorkerError>> for AggregateFailure {
    fn from(failures: Vec<WorkerError>) -> Self {
        Self::new(failures)
    }
}

impl<'a> IntoIterator for &'a AggregateFailure {
    type Item = &'a WorkerError;
    type IntoIter = std::slice::Iter<'a, WorkerError>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl fmt::Display for AggregateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return write!(f, "no failures");
        }
        write!(f, "{} failure(s): ", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateFailure {}

/// Free-function form of [`AggregateFailure::contains_resource_disposed`],
/// for call sites that already hold a reference.
pub fn contains_resource_disposed(failures: &AggregateFailure) -> bool {
    failures.contains_resource_disposed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_aggregate_is_not_disposed() {
        let agg = AggregateFailure::default();
        assert!(agg.is_empty());
        assert!(!contains_resource_disposed(&agg));
    }

    #[test]
    fn other_kinds_only_is_not_disposed() {
        let agg = AggregateFailure::new(vec![
            WorkerError::Http(503),
            WorkerError::Io(std::io::Error::other("disk full")),
        ]);
        assert!(!contains_resource_disposed(&agg));
    }

    #[test]
    fn disposed_detected_in_any_position() {
        let first = AggregateFailure::new(vec![
            WorkerError::ResourceDisposed,
            WorkerError::Http(404),
        ]);
        let middle = AggregateFailure::new(vec![
            WorkerError::Http(404),
            WorkerError::ResourceDisposed,
            WorkerError::Http(500),
        ]);
        let last = AggregateFailure::new(vec![
            WorkerError::Http(404),
            WorkerError::ResourceDisposed,
        ]);
        assert!(first.contains_resource_disposed());
        assert!(middle.contains_resource_disposed());
        assert!(last.contains_resource_disposed());
    }

    #[test]
    fn classification_does_not_consume_the_aggregate() {
        let agg = AggregateFailure::new(vec![WorkerError::ResourceDisposed]);
        assert!(agg.contains_resource_disposed());
        assert!(agg.contains_resource_disposed());
        assert_eq!(agg.len(), 1);
        assert_eq!(agg.iter().count(), 1);
    }

    #[test]
    fn display_joins_members_in_order() {
        let agg = AggregateFailure::new(vec![
            WorkerError::Http(503),
            WorkerError::ResourceDisposed,
        ]);
        let s = agg.to_string();
        assert!(s.starts_with("2 failure(s): HTTP 503; "));
    }

    #[test]
    fn metadata_errors_convert_into_worker_errors() {
        let err = crate::metadata::sanity_check_patch_directory(b"").unwrap_err();
        let worker: WorkerError = err.into();
        assert!(matches!(worker, WorkerError::Metadata(_)));
    }
}
