//! Column filter on location.

use crate::params::QueryParams;
use crate::traits::Filter;
use data_loader::CandidateRecord;

/// Case-insensitive substring match on location
pub fn location_matches(record: &CandidateRecord, needle: &str) -> bool {
    needle.is_empty() || record.location.to_lowercase().contains(&needle.to_lowercase())
}

pub struct LocationFilter;

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn is_active(&self, params: &QueryParams) -> bool {
        !params.filters.location.is_empty()
    }

    fn keep(&self, record: &CandidateRecord, params: &QueryParams) -> bool {
        location_matches(record, &params.filters.location)
    }
}
