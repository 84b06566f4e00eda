//! The candidate board: owner of the collection and the query state.
//!
//! The board holds the one authoritative copy of the raw collection and of
//! the [`QueryParams`]. Every edit replaces a whole value; the table view
//! and the analytics are recomputed from scratch whenever they are asked
//! for, so there is nothing to invalidate.

use crate::aggregation::{AggregationEngine, AggregationResult};
use crate::params::{ColumnFilters, QueryParams, SortKey};
use crate::query::QueryPipeline;
use data_loader::{CandidateRecord, RawCandidate, normalize};

pub struct CandidateBoard {
    records: Vec<RawCandidate>,
    params: QueryParams,
    pipeline: QueryPipeline,
    engine: AggregationEngine,
}

impl CandidateBoard {
    /// A board with no data yet and default query parameters
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<RawCandidate>) -> Self {
        Self {
            records,
            params: QueryParams::default(),
            pipeline: QueryPipeline::new(),
            engine: AggregationEngine::new(),
        }
    }

    pub fn records(&self) -> &[RawCandidate] {
        &self.records
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Swap in a freshly fetched collection. Query parameters are kept.
    pub fn replace_records(&mut self, records: Vec<RawCandidate>) {
        tracing::debug!(
            "Replacing {} candidates with {}",
            self.records.len(),
            records.len()
        );
        self.records = records;
    }

    pub fn set_params(&mut self, params: QueryParams) {
        self.params = params;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.params = self.params.clone().with_search_term(term);
    }

    pub fn set_filters(&mut self, filters: ColumnFilters) {
        self.params = self.params.clone().with_filters(filters);
    }

    /// "Sort by `key`": the shared direction flag flips on every request,
    /// even when the column changes.
    pub fn request_sort(&mut self, key: SortKey) {
        self.params = self.params.sort_toggled(key);
        tracing::debug!(
            "Sort requested on {} -> {:?}",
            key,
            self.params.sort.direction
        );
    }

    /// Reset the column filters and the search term. Sorting is kept.
    pub fn clear_filters(&mut self) {
        self.params = QueryParams {
            sort: self.params.sort,
            ..QueryParams::default()
        };
    }

    pub fn is_any_filter_applied(&self) -> bool {
        self.params.has_active_filters()
    }

    /// The table view under the current query parameters
    pub fn view(&self) -> Vec<CandidateRecord> {
        self.pipeline.run(&self.records, &self.params)
    }

    /// Dashboard statistics over the whole collection
    pub fn analytics(&self) -> AggregationResult {
        self.engine.aggregate(&self.records)
    }

    /// One candidate's normalized record, looked up by id.
    ///
    /// An empty id never matches, even records that carry no id.
    pub fn profile(&self, id: &str) -> Option<CandidateRecord> {
        if id.is_empty() {
            return None;
        }
        self.records.iter().map(normalize).find(|record| record.id == id)
    }
}

impl Default for CandidateBoard {
    fn default() -> Self {
        Self::new()
    }
}
