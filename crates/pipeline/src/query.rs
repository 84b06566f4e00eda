//! The query pipeline: normalize, search, filter, sort.
//!
//! Every call starts over from the full raw collection. Nothing is cached
//! between calls, so two calls with equal inputs give equal outputs.

use crate::filter_pipeline::FilterPipeline;
use crate::params::QueryParams;
use crate::sort::sort_records;
use data_loader::{CandidateRecord, RawCandidate, normalize_all};

/// Runs a [`FilterPipeline`] and the sort step over a raw collection.
///
/// ## Algorithm
/// 1. Normalize every raw record (input order kept)
/// 2. Run the filters; each one only removes records
/// 3. Sort by `params.sort` if a key is set, otherwise keep order
pub struct QueryPipeline {
    filters: FilterPipeline,
}

impl QueryPipeline {
    /// The candidate table's pipeline (see [`FilterPipeline::standard`])
    pub fn new() -> Self {
        Self::with_filters(FilterPipeline::standard())
    }

    pub fn with_filters(filters: FilterPipeline) -> Self {
        Self { filters }
    }

    pub fn run(&self, raw: &[RawCandidate], params: &QueryParams) -> Vec<CandidateRecord> {
        let records = normalize_all(raw);
        let filtered = self.filters.apply(records, params);
        tracing::debug!(
            "Query kept {} of {} candidates (sort: {:?})",
            filtered.len(),
            raw.len(),
            params.sort
        );
        sort_records(filtered, &params.sort)
    }
}

impl Default for QueryPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Filtered, searched and sorted view of `raw` under `params`
pub fn query(raw: &[RawCandidate], params: &QueryParams) -> Vec<CandidateRecord> {
    QueryPipeline::new().run(raw, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::LocationFilter;
    use crate::params::{ColumnFilters, SortDirection, SortKey, SortSpec};
    use serde_json::json;

    fn raw_records() -> Vec<RawCandidate> {
        serde_json::from_value(json!([
            {"id": "1", "firstName": "Ann", "lastName": "Lee", "skills": ["Go"],
             "yearsOfExperience": 3, "location": "NY"},
            {"id": "2", "firstName": "Bo", "lastName": "Park", "skills": ["Go", "Rust"],
             "yearsOfExperience": 13, "location": "SF"},
            {"id": "3", "firstName": "Cy", "skills": ["Python"],
             "yearsOfExperience": "lots", "location": "NY"}
        ]))
        .unwrap()
    }

    fn ids(records: &[CandidateRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_default_params_return_everything_in_order() {
        let result = query(&raw_records(), &QueryParams::new());
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(query(&[], &QueryParams::new().with_search_term("go")).is_empty());
    }

    #[test]
    fn test_search_filter_and_sort() {
        let params = QueryParams::new()
            .with_filters(ColumnFilters {
                location: "ny".to_string(),
                ..ColumnFilters::default()
            })
            .with_sort(SortSpec::new(SortKey::FirstName, SortDirection::Desc));

        let result = query(&raw_records(), &params);
        assert_eq!(ids(&result), vec!["3", "1"]);
    }

    #[test]
    fn test_missing_fields_are_normalized_before_matching() {
        // Cy has no last name; the name filter must not trip over it
        let params = QueryParams::new().with_filters(ColumnFilters {
            name: "cy".to_string(),
            ..ColumnFilters::default()
        });

        let result = query(&raw_records(), &params);
        assert_eq!(ids(&result), vec!["3"]);
        assert_eq!(result[0].last_name, "");
    }

    #[test]
    fn test_custom_pipeline() {
        let pipeline = QueryPipeline::with_filters(FilterPipeline::new().add_filter(LocationFilter));
        // The search term is ignored because no SearchFilter is installed
        let params = QueryParams::new()
            .with_search_term("nobody")
            .with_filters(ColumnFilters {
                location: "sf".to_string(),
                ..ColumnFilters::default()
            });

        assert_eq!(ids(&pipeline.run(&raw_records(), &params)), vec!["2"]);
    }
}
