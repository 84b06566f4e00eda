//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{ExperienceFilter, LocationFilter, NameFilter, SearchFilter, SkillsFilter};
use crate::params::QueryParams;
use crate::traits::Filter;
use data_loader::CandidateRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter)
///     .add_filter(SkillsFilter);
///
/// let filtered = pipeline.apply(records, &params);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The candidate table's pipeline: free-text search, then the four
    /// column filters.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(SearchFilter)
            .add_filter(NameFilter)
            .add_filter(SkillsFilter)
            .add_filter(LocationFilter)
            .add_filter(ExperienceFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the records.
    ///
    /// Record order is preserved; filters only ever remove.
    pub fn apply(&self, records: Vec<CandidateRecord>, params: &QueryParams) -> Vec<CandidateRecord> {
        let mut current = records;
        for filter in &self.filters {
            if !filter.is_active(params) {
                continue;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = current
                .into_iter()
                .filter(|record| filter.keep(record, params))
                .collect();
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ColumnFilters;
    use crate::test_support::{candidate, years};

    fn records() -> Vec<CandidateRecord> {
        vec![
            candidate("Ann", "Lee", &["Go"], years(3), "NY"),
            candidate("Bo", "Park", &["Go", "Rust"], years(13), "SF"),
            candidate("Cy", "Diaz", &["Python"], years(1), "NY"),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let params = QueryParams::new().with_search_term("nobody");

        let filtered = pipeline.apply(records(), &params);
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(LocationFilter);
        let params = QueryParams::new().with_filters(ColumnFilters {
            location: "ny".to_string(),
            ..ColumnFilters::default()
        });

        let filtered = pipeline.apply(records(), &params);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].first_name, "Ann");
        assert_eq!(filtered[1].first_name, "Cy");
    }

    #[test]
    fn test_standard_pipeline_search_and_filters() {
        let params = QueryParams::new()
            .with_search_term("go")
            .with_filters(ColumnFilters {
                experience: "1".to_string(),
                ..ColumnFilters::default()
            });

        let filtered = FilterPipeline::standard().apply(records(), &params);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].first_name, "Bo");
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            FilterPipeline::standard().filter_names(),
            vec!["SearchFilter", "NameFilter", "SkillsFilter", "LocationFilter", "ExperienceFilter"]
        );
    }

    struct RejectAllWhenSet;

    impl Filter for RejectAllWhenSet {
        fn name(&self) -> &str {
            "RejectAllWhenSet"
        }

        fn is_active(&self, params: &QueryParams) -> bool {
            !params.search_term.is_empty()
        }

        fn keep(&self, _record: &CandidateRecord, _params: &QueryParams) -> bool {
            false
        }
    }

    #[test]
    fn test_inactive_filter_skipped() {
        let pipeline = FilterPipeline::new().add_filter(RejectAllWhenSet);

        assert_eq!(pipeline.apply(records(), &QueryParams::new()).len(), 3);
        assert!(pipeline.apply(records(), &QueryParams::new().with_search_term("x")).is_empty());
    }
}
