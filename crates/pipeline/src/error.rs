//! Error types for the pipeline crate.
//!
//! Running a query or an aggregation never fails. These errors only come
//! from turning user-supplied text into query parameters.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The requested column is not one a candidate can be sorted by
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown sort direction: {0} (expected asc or desc)")]
    UnknownDirection(String),
}

pub type Result<T> = std::result::Result<T, QueryError>;
