//! One-shot connectivity check: row counts for the four core collections.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use crate::backend::AuthBackend;

/// Collections probed by the startup connectivity check.
pub const COLLECTIONS: [&str; 4] = ["clients", "staff", "services", "appointments"];

/// A failed count for one collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionError {
    pub collection: String,
    pub message: String,
}

/// Aggregated counts in [`COLLECTIONS`] order plus any per-collection
/// failures. A failed collection still appears in `counts`, as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticsReport {
    pub counts: Vec<(String, u64)>,
    pub errors: Vec<CollectionError>,
}

impl DiagnosticsReport {
    pub fn count(&self, collection: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|(name, _)| name == collection)
            .map(|(_, count)| *count)
    }

    /// Report where every collection failed with the same message. Used when
    /// the backend is not configured at all.
    pub fn all_failed(message: &str) -> Self {
        let mut report = Self::default();
        for collection in COLLECTIONS {
            report.counts.push((collection.to_owned(), 0));
            report.errors.push(CollectionError {
                collection: collection.to_owned(),
                message: message.to_owned(),
            });
        }
        report
    }
}

/// Fire all four count requests concurrently and wait for every one to
/// settle before returning; partial results are never exposed. One failure
/// does not abort the others. Never retried, never refetched.
pub async fn fetch_diagnostics<B: AuthBackend>(backend: &B) -> DiagnosticsReport {
    let results =
        futures::future::join_all(COLLECTIONS.iter().map(|c| backend.count_rows(c))).await;

    let mut report = DiagnosticsReport::default();
    for (collection, result) in COLLECTIONS.iter().zip(results) {
        match result {
            Ok(count) => report.counts.push(((*collection).to_owned(), count)),
            Err(err) => {
                report.counts.push(((*collection).to_owned(), 0));
                report.errors.push(CollectionError {
                    collection: (*collection).to_owned(),
                    message: err.to_string(),
                });
            }
        }
    }
    report
}
