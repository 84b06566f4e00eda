//! Column filter on years of experience.
//!
//! Same text-form substring rule as the free-text search: `"1"` keeps
//! 1, 10, 11, 21... This is not a numeric range filter.

use crate::params::QueryParams;
use crate::traits::Filter;
use data_loader::CandidateRecord;

pub fn experience_matches(record: &CandidateRecord, needle: &str) -> bool {
    needle.is_empty() || record.years_of_experience.to_string().contains(needle)
}

pub struct ExperienceFilter;

impl Filter for ExperienceFilter {
    fn name(&self) -> &str {
        "ExperienceFilter"
    }

    fn is_active(&self, params: &QueryParams) -> bool {
        !params.filters.experience.is_empty()
    }

    fn keep(&self, record: &CandidateRecord, params: &QueryParams) -> bool {
        experience_matches(record, &params.filters.experience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ColumnFilters;
    use crate::test_support::{candidate, years};
    use data_loader::Experience;

    #[test]
    fn test_experience_filter() {
        let params = QueryParams::new().with_filters(ColumnFilters {
            experience: "2".to_string(),
            ..ColumnFilters::default()
        });

        let records = vec![
            candidate("A", "A", &[], years(2), "X"),
            candidate("B", "B", &[], years(12), "X"),
            candidate("C", "C", &[], years(5), "X"),
            candidate("D", "D", &[], Experience::Unparsed("two".to_string()), "X"),
        ];

        let kept: Vec<String> = ExperienceFilter
            .apply(records, &params)
            .into_iter()
            .map(|r| r.first_name)
            .collect();
        assert_eq!(kept, vec!["A", "B"]);
    }
}
