use crate::records::record::FlatRecord;

/// Outcome of a fetch against a paginated store.
///
/// A fetch that hits a transport failure still returns everything gathered
/// before the failure; `failure` tells the caller the rows are partial.
#[derive(Debug)]
pub struct FetchResult<E> {
    pub rows: Vec<FlatRecord>,
    pub row_count: usize,
    /// Requests issued against the store, including the terminating one.
    pub requests: usize,
    pub took_ms: u128,
    pub failure: Option<E>,
}

impl<E> FetchResult<E> {
    pub fn new(rows: Vec<FlatRecord>, requests: usize, took_ms: u128) -> Self {
        FetchResult {
            row_count: rows.len(),
            rows,
            requests,
            took_ms,
            failure: None,
        }
    }

    pub fn with_failure(mut self, failure: E) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
