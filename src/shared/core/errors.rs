use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error(
        "invalid consistency condition: event at position {position} matches the criteria at or after boundary {boundary}"
    )]
    InvalidConsistencyCondition { boundary: i64, position: u64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
