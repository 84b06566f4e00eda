//! Query and aggregation engine for the candidate table and dashboard.
//!
//! This crate provides:
//! - QueryParams: search term, column filters and sort spec as one value
//! - Filter trait and implementations for search and column filters
//! - FilterPipeline for composing filters
//! - Sort comparator and the QueryPipeline that ties everything together
//! - AggregationEngine for the dashboard's count distributions
//! - CandidateBoard, the controller that owns the collection and query state
//!
//! ## Architecture
//! A query processes the raw collection in stages:
//! 1. Every raw record is normalized
//! 2. Filters remove records (search first, then the four column filters)
//! 3. The survivors are sorted if a sort key is set
//!
//! Aggregation runs separately, always over the whole collection.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{CandidateBoard, SortKey};
//!
//! let mut board = CandidateBoard::with_records(raw);
//! board.set_search_term("rust");
//! board.request_sort(SortKey::YearsOfExperience);
//!
//! let rows = board.view();
//! let charts = board.analytics().chart_data();
//! ```

pub mod aggregation;
pub mod board;
pub mod charts;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod params;
pub mod query;
pub mod sort;
pub mod traits;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use aggregation::{AggregationEngine, AggregationResult, Distribution, StageCounts, aggregate};
pub use board::CandidateBoard;
pub use charts::{ChartData, ChartPoint, StageBar};
pub use error::QueryError;
pub use filter_pipeline::FilterPipeline;
pub use filters::{matches, passes};
pub use params::{ColumnFilters, QueryParams, SortDirection, SortKey, SortSpec};
pub use query::{QueryPipeline, query};
pub use sort::compare;
pub use traits::Filter;
