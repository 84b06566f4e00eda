//! Column filter on first or last name.

use crate::params::QueryParams;
use crate::traits::Filter;
use data_loader::CandidateRecord;

/// Case-insensitive substring match against first name OR last name
pub fn name_matches(record: &CandidateRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    record.first_name.to_lowercase().contains(&needle)
        || record.last_name.to_lowercase().contains(&needle)
}

pub struct NameFilter;

impl Filter for NameFilter {
    fn name(&self) -> &str {
        "NameFilter"
    }

    fn is_active(&self, params: &QueryParams) -> bool {
        !params.filters.name.is_empty()
    }

    fn keep(&self, record: &CandidateRecord, params: &QueryParams) -> bool {
        name_matches(record, &params.filters.name)
    }
}
