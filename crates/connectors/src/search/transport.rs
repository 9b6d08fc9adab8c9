use crate::{
    error::TransportError,
    search::wire::{SearchRequest, SearchResponse},
};
use model::pagination::cursor::{KeepAlive, ScrollRequest};

/// Request/response access to a search store.
///
/// Implementations issue exactly one request per call and never retry;
/// retry decisions belong to the caller.
pub trait SearchTransport {
    /// `POST /{index}/_search`, opening a scroll context when `scroll` is set.
    fn search(
        &self,
        index: &str,
        request: &SearchRequest,
        scroll: Option<KeepAlive>,
    ) -> Result<SearchResponse, TransportError>;

    /// `POST /_search/scroll` with the handle of the previous page.
    fn scroll(&self, request: &ScrollRequest) -> Result<SearchResponse, TransportError>;
}

impl<T: SearchTransport + ?Sized> SearchTransport for &T {
    fn search(
        &self,
        index: &str,
        request: &SearchRequest,
        scroll: Option<KeepAlive>,
    ) -> Result<SearchResponse, TransportError> {
        (**self).search(index, request, scroll)
    }

    fn scroll(&self, request: &ScrollRequest) -> Result<SearchResponse, TransportError> {
        (**self).scroll(request)
    }
}
