//! Free-text search across the visible columns.
//!
//! Text columns match case-insensitively. Experience matches against its
//! decimal text form, literally, so a term of `"1"` hits 1, 10, 11, 21...

use crate::params::QueryParams;
use crate::traits::Filter;
use data_loader::CandidateRecord;

/// Does `record` match the search `term`?
///
/// An empty term matches everything.
pub fn matches(record: &CandidateRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(record.first_name.as_str())
        || contains(record.last_name.as_str())
        || record.skills.iter().any(|skill| contains(skill.as_str()))
        || contains(record.location.as_str())
        || record.years_of_experience.to_string().contains(term)
}

/// Keeps candidates matching the free-text search term.
pub struct SearchFilter;

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn is_active(&self, params: &QueryParams) -> bool {
        !params.search_term.is_empty()
    }

    fn keep(&self, record: &CandidateRecord, params: &QueryParams) -> bool {
        matches(record, &params.search_term)
    }
}
