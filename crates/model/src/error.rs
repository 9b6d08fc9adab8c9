use thiserror::Error;

/// Invalid caller-supplied configuration. Raised before any I/O is attempted
/// and fatal to the single call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Invalid page size {0}: must be greater than zero")]
    InvalidPageSize(usize),

    #[error("Unknown fill policy: {0}")]
    UnknownFillPolicy(String),

    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    #[error("Duplicate column in schema: {0}")]
    DuplicateColumn(String),

    #[error("Schema '{0}' declares no columns")]
    EmptySchema(String),

    #[error("Fill policy {policy} cannot be applied to {data_type} column '{column}'")]
    IncompatibleFill {
        column: String,
        policy: String,
        data_type: String,
    },

    #[error("Row filter column '{0}' is not a string column of the schema")]
    InvalidFilterColumn(String),

    #[error("Unknown schema preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid schema definition: {0}")]
    InvalidSchema(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
