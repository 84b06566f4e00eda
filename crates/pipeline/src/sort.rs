//! Ordering of candidate records by one column.
//!
//! Strings compare lexicographically, skill lists compare element by
//! element, experience compares numerically with unparsed values after all
//! numbers. Sorting is stable: ties keep their input order in both
//! directions.

use crate::params::{SortKey, SortSpec};
use data_loader::CandidateRecord;
use std::cmp::Ordering;

/// Ascending comparison of two records on `key`
pub fn compare(a: &CandidateRecord, b: &CandidateRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::FirstName => a.first_name.cmp(&b.first_name),
        SortKey::LastName => a.last_name.cmp(&b.last_name),
        SortKey::Skills => a.skills.cmp(&b.skills),
        SortKey::YearsOfExperience => a.years_of_experience.cmp(&b.years_of_experience),
        SortKey::Location => a.location.cmp(&b.location),
        SortKey::CodingResult => a.coding_result.cmp(&b.coding_result),
        SortKey::VideoInterviewResult => a.video_interview_result.cmp(&b.video_interview_result),
    }
}

/// Order `records` by `spec`. Without a key the input order is returned.
pub fn sort_records(mut records: Vec<CandidateRecord>, spec: &SortSpec) -> Vec<CandidateRecord> {
    if let Some(key) = spec.key {
        records.sort_by(|a, b| spec.direction.apply(compare(a, b, key)));
    }
    records
}
