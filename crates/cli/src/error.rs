use connectors::error::{ConnectorError, TransportError};
use model::error::ConfigurationError;
use processing::error::SummaryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to set up the store connection: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Failed to fetch data: {0}")]
    Fetch(#[from] TransportError),

    #[error("Failed to summarize data: {0}")]
    Summary(#[from] SummaryError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
