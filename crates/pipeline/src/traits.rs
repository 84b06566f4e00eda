//! Core traits for the query pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a candidate collection.

use crate::params::QueryParams;
use data_loader::CandidateRecord;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// A filter reads its constraint out of the [`QueryParams`] it is handed,
/// so the same pipeline serves every query.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<CandidateRecord> and return a filtered Vec
/// - Filtering cannot fail: a record either passes or it does not
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `params` carries a constraint for this filter at all
    fn is_active(&self, _params: &QueryParams) -> bool {
        true
    }

    /// Whether a single record satisfies this filter
    fn keep(&self, record: &CandidateRecord, params: &QueryParams) -> bool;

    /// Apply this filter to a set of candidates, preserving their order.
    ///
    /// Inactive filters hand the input back untouched.
    fn apply(&self, records: Vec<CandidateRecord>, params: &QueryParams) -> Vec<CandidateRecord> {
        if !self.is_active(params) {
            return records;
        }
        records
            .into_iter()
            .filter(|record| self.keep(record, params))
            .collect()
    }
}
