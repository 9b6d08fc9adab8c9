use crate::{
    error::TransportError,
    search::{
        source::{ScrollOptions, SearchSource},
        transport::SearchTransport,
    },
};
use model::{error::ConfigurationError, records::record::FlatRecord};
use tracing::{info, warn};

pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Result of one session fetch step.
#[derive(Debug)]
pub struct PageOutcome {
    pub returned: usize,
    /// The store handed back fewer documents than requested without failing.
    pub reached_end: bool,
    pub failure: Option<TransportError>,
}

/// Per-session fetch state: the current offset and every record gathered so
/// far, in store order. One instance per user session; nothing is shared or
/// persisted.
#[derive(Debug, Default)]
pub struct Session {
    offset: usize,
    records: Vec<FlatRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn records(&self) -> &[FlatRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.offset = 0;
        self.records.clear();
    }

    /// Fetches the next page at the current offset and appends it.
    ///
    /// On failure nothing is appended and the offset does not move, so the
    /// same step can simply be repeated.
    pub fn fetch_next<T: SearchTransport>(
        &mut self,
        source: &SearchSource<T>,
        page_size: usize,
    ) -> Result<PageOutcome, ConfigurationError> {
        let page = source.fetch_page(page_size, self.offset)?;
        if let Some(failure) = page.failure {
            return Ok(PageOutcome {
                returned: 0,
                reached_end: false,
                failure: Some(failure),
            });
        }

        let returned = page.row_count;
        self.records.extend(page.rows);
        self.offset += returned;

        let reached_end = returned < page_size;
        if reached_end {
            info!(
                "Reached the end of '{}' at offset {}",
                source.index(),
                self.offset
            );
        }
        Ok(PageOutcome {
            returned,
            reached_end,
            failure: None,
        })
    }

    /// Loads the whole index through a scroll, unless the session already
    /// holds records. Partial results are kept.
    pub fn load_all<T: SearchTransport>(
        &mut self,
        source: &SearchSource<T>,
        options: ScrollOptions,
    ) -> Result<PageOutcome, ConfigurationError> {
        if !self.records.is_empty() {
            info!(
                "Session already holds {} records from '{}', skipping fetch",
                self.records.len(),
                source.index()
            );
            return Ok(PageOutcome {
                returned: 0,
                reached_end: true,
                failure: None,
            });
        }

        let result = source.fetch_all(options)?;
        let returned = result.row_count;
        if let Some(failure) = &result.failure {
            warn!("Keeping {} records from a partial fetch: {}", returned, failure);
        }
        self.records.extend(result.rows);
        self.offset = self.records.len();

        Ok(PageOutcome {
            returned,
            reached_end: result.failure.is_none(),
            failure: result.failure,
        })
    }
}
