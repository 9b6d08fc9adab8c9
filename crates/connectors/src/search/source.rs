use crate::{
    error::{Operation, TransportError},
    search::{
        config::validate_index,
        transport::SearchTransport,
        wire::{ScrollPage, SearchRequest},
    },
};
use model::{
    error::ConfigurationError,
    pagination::{cursor::KeepAlive, page::FetchResult},
    records::{document::Document, record::FlatRecord},
};
use std::time::Instant;
use tracing::{debug, info, warn};

pub const DEFAULT_SCROLL_PAGE_SIZE: usize = 1000;

pub type SearchFetch = FetchResult<TransportError>;

/// Page size and keep-alive of an exhaustive scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub page_size: usize,
    pub keep_alive: KeepAlive,
}

impl ScrollOptions {
    pub fn with_page_size(page_size: usize) -> Self {
        ScrollOptions {
            page_size,
            ..Self::default()
        }
    }
}

impl Default for ScrollOptions {
    fn default() -> Self {
        ScrollOptions {
            page_size: DEFAULT_SCROLL_PAGE_SIZE,
            keep_alive: KeepAlive::DEFAULT,
        }
    }
}

/// Read access to one index of the store.
pub struct SearchSource<T: SearchTransport> {
    transport: T,
    index: String,
}

impl<T: SearchTransport> SearchSource<T> {
    pub fn new(transport: T, index: impl Into<String>) -> Result<Self, ConfigurationError> {
        let index = index.into();
        validate_index(&index)?;
        Ok(SearchSource { transport, index })
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Fetches `page_size` documents starting at `offset` with a stateless
    /// match-all query.
    ///
    /// A transport failure is not raised: the result is empty and carries the
    /// failure so the caller can decide whether to retry.
    pub fn fetch_page(
        &self,
        page_size: usize,
        offset: usize,
    ) -> Result<SearchFetch, ConfigurationError> {
        check_page_size(page_size)?;
        let start = Instant::now();
        let request = SearchRequest::page(page_size, offset);

        match self.transport.search(&self.index, &request, None) {
            Ok(response) => {
                let rows = response.into_rows();
                debug!(
                    "Fetched {} of {} requested documents from '{}' at offset {}",
                    rows.len(),
                    page_size,
                    self.index,
                    offset
                );
                Ok(FetchResult::new(rows, 1, start.elapsed().as_millis()))
            }
            Err(err) => {
                warn!("Failed to fetch data: {}", err);
                Ok(FetchResult::new(Vec::new(), 1, start.elapsed().as_millis()).with_failure(err))
            }
        }
    }

    /// Walks a scroll cursor over the whole index.
    ///
    /// Pages are requested strictly one after another, each with the handle
    /// returned by the previous page, until the store answers with an empty
    /// page. A failure at any point stops the walk; the rows gathered so far
    /// are returned together with the failure.
    pub fn fetch_all(&self, options: ScrollOptions) -> Result<SearchFetch, ConfigurationError> {
        check_page_size(options.page_size)?;
        let start = Instant::now();
        let mut rows: Vec<FlatRecord> = Vec::new();
        let mut requests = 1;

        let opening = self
            .transport
            .search(
                &self.index,
                &SearchRequest::match_all(options.page_size),
                Some(options.keep_alive),
            )
            .and_then(|response| {
                ScrollPage::from_response(
                    response,
                    Operation::Search {
                        index: self.index.clone(),
                    },
                )
            });

        let mut page = match opening {
            Ok(page) => page,
            Err(err) => {
                warn!("Failed to open scroll on '{}': {}", self.index, err);
                return Ok(FetchResult::new(rows, requests, start.elapsed().as_millis())
                    .with_failure(err));
            }
        };

        while let ScrollPage::Hits { documents, cursor } = page {
            rows.extend(documents.iter().map(Document::flatten));
            debug!("Scrolled {} documents from '{}'", rows.len(), self.index);

            requests += 1;
            let next = self
                .transport
                .scroll(&cursor.into_request(options.keep_alive))
                .and_then(|response| ScrollPage::from_response(response, Operation::Scroll));

            page = match next {
                Ok(page) => page,
                Err(err) => {
                    warn!(
                        "Failed to continue scrolling '{}' after {} documents: {}",
                        self.index,
                        rows.len(),
                        err
                    );
                    return Ok(FetchResult::new(rows, requests, start.elapsed().as_millis())
                        .with_failure(err));
                }
            };
        }

        info!(
            "Fetched {} documents from '{}' in {} requests",
            rows.len(),
            self.index,
            requests
        );
        Ok(FetchResult::new(rows, requests, start.elapsed().as_millis()))
    }
}

fn check_page_size(page_size: usize) -> Result<(), ConfigurationError> {
    if page_size == 0 {
        return Err(ConfigurationError::InvalidPageSize(page_size));
    }
    Ok(())
}
