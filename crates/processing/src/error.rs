use model::core::data_type::DataType;
use thiserror::Error;

/// Errors raised when summarizing a normalized table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column '{column}' is {data_type}, expected numeric")]
    NotNumeric { column: String, data_type: DataType },
}
