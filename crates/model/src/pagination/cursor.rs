use serde::Serialize;
use std::{fmt, time::Duration};

/// Opaque continuation token for an open scroll context on the store.
///
/// The handle is neither `Clone` nor `Copy`: every continuation request
/// consumes it, and only a non-empty page hands a fresh one back. An
/// exhausted scroll therefore leaves nothing that could be reused.
///
/// There is no explicit close. Abandoned handles are released by the store
/// once their keep-alive expires.
#[derive(PartialEq, Eq)]
pub struct ScrollId(String);

impl ScrollId {
    pub fn new(token: impl Into<String>) -> Self {
        ScrollId(token.into())
    }

    /// Consumes the handle into the body of a continuation request.
    pub fn into_request(self, keep_alive: KeepAlive) -> ScrollRequest {
        ScrollRequest {
            scroll: keep_alive.to_string(),
            scroll_id: self.0,
        }
    }
}

// Tokens can be long and are session-bound; keep them out of logs.
impl fmt::Debug for ScrollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScrollId(<{} bytes>)", self.0.len())
    }
}

/// Body of a `/_search/scroll` continuation request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScrollRequest {
    pub scroll: String,
    pub scroll_id: String,
}

/// Store-side lifetime of a scroll context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepAlive(Duration);

impl KeepAlive {
    pub const DEFAULT: KeepAlive = KeepAlive(Duration::from_secs(120));

    pub fn new(duration: Duration) -> Self {
        KeepAlive(duration)
    }
}

impl Default for KeepAlive {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Renders in the store's time-unit syntax, e.g. `2m` or `90s`.
impl fmt::Display for KeepAlive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs().max(1);
        if secs % 3600 == 0 {
            write!(f, "{}h", secs / 3600)
        } else if secs % 60 == 0 {
            write!(f, "{}m", secs / 60)
        } else {
            write!(f, "{secs}s")
        }
    }
}
