use model::error::ConfigurationError;
use std::fmt;
use thiserror::Error;

/// The store operation a transport failure belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Search against an index, offset-based or opening a scroll.
    Search { index: String },
    /// Continuation of an open scroll.
    Scroll,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Search { index } => write!(f, "search on '{index}'"),
            Operation::Scroll => f.write_str("scroll continuation"),
        }
    }
}

/// A failed request against the store. Always recoverable at the fetch
/// boundary: fetch operations return what they have and carry this along.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{operation} failed: HTTP {status} - {body}")]
    Http {
        operation: Operation,
        status: u16,
        body: String,
    },

    #[error("{operation} failed: {message}")]
    Network { operation: Operation, message: String },

    #[error("{operation} failed: could not decode response: {message}")]
    Decode { operation: Operation, message: String },

    /// The request could not be built, e.g. an index name that cannot form a
    /// URL. Nothing was sent.
    #[error("{operation} not sent: {message}")]
    InvalidRequest { operation: Operation, message: String },

    #[error("{operation} failed: response carried hits but no scroll id")]
    MissingScrollId { operation: Operation },
}

impl TransportError {
    pub fn operation(&self) -> &Operation {
        match self {
            TransportError::Http { operation, .. }
            | TransportError::Network { operation, .. }
            | TransportError::Decode { operation, .. }
            | TransportError::InvalidRequest { operation, .. }
            | TransportError::MissingScrollId { operation } => operation,
        }
    }

    /// HTTP status of the failed request, if the store answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while setting up a connector.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_operation() {
        let err = TransportError::Http {
            operation: Operation::Search {
                index: "trees_data".into(),
            },
            status: 401,
            body: "unauthorized".into(),
        };
        assert_eq!(
            err.to_string(),
            "search on 'trees_data' failed: HTTP 401 - unauthorized"
        );
        assert_eq!(err.status(), Some(401));

        let err = TransportError::Network {
            operation: Operation::Scroll,
            message: "connection refused".into(),
        };
        assert_eq!(
            err.to_string(),
            "scroll continuation failed: connection refused"
        );
        assert_eq!(err.operation(), &Operation::Scroll);
        assert_eq!(err.status(), None);
    }
}
