//! Fetching documents from a search index over its HTTP API.
//!
//! Two access paths are offered: an offset-based page fetch for incremental
//! "give me the next N" interactions, and an exhaustive scroll that walks an
//! open cursor until the store returns an empty page.

pub mod config;
pub mod http;
pub mod session;
pub mod source;
pub mod transport;
pub mod wire;

pub use config::ElasticConfig;
pub use http::HttpTransport;
pub use session::{PageOutcome, Session};
pub use source::{ScrollOptions, SearchFetch, SearchSource};
pub use transport::SearchTransport;
