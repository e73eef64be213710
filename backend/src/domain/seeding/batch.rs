//! Best-effort concurrent batches.

use std::future::Future;

use futures_util::future::join_all;

/// Tally of a settled batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome<E> {
    /// Number of futures that resolved to `Ok`.
    pub succeeded: usize,
    /// Errors from the futures that resolved to `Err`.
    pub failed: Vec<E>,
}

impl<E> Default for BatchOutcome<E> {
    fn default() -> Self {
        Self {
            succeeded: 0,
            failed: Vec::new(),
        }
    }
}

/// Drive every future to completion and tally the results.
///
/// A failing item never cancels its siblings. Completion order inside the
/// batch is unspecified.
pub async fn settle_all<I, F, T, E>(futures: I) -> BatchOutcome<E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    join_all(futures)
        .await
        .into_iter()
        .fold(BatchOutcome::default(), |mut outcome, result| {
            match result {
                Ok(_) => outcome.succeeded += 1,
                Err(error) => outcome.failed.push(error),
            }
            outcome
        })
}
