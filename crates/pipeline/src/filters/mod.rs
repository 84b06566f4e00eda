//! Filter implementations for the query pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline, plus the combined
//! column predicate [`passes`].

pub mod experience;
pub mod location;
pub mod name;
pub mod search;
pub mod skills;

// Re-export for convenience
pub use experience::{ExperienceFilter, experience_matches};
pub use location::{LocationFilter, location_matches};
pub use name::{NameFilter, name_matches};
pub use search::{SearchFilter, matches};
pub use skills::{SkillsFilter, has_skill};

use crate::params::ColumnFilters;
use data_loader::CandidateRecord;

/// Does `record` satisfy every non-empty column constraint?
pub fn passes(record: &CandidateRecord, filters: &ColumnFilters) -> bool {
    name_matches(record, &filters.name)
        && has_skill(record, &filters.skills)
        && location_matches(record, &filters.location)
        && experience_matches(record, &filters.experience)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{candidate, years};

    #[test]
    fn test_empty_filters_pass_everything() {
        let record = candidate("", "", &[], years(0), "");
        assert!(passes(&record, &ColumnFilters::default()));
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let record = candidate("Ann", "Lee", &["Go"], years(3), "NY");

        let both = ColumnFilters {
            name: "ann".to_string(),
            location: "ny".to_string(),
            ..ColumnFilters::default()
        };
        assert!(passes(&record, &both));

        let one_wrong = ColumnFilters {
            location: "sf".to_string(),
            ..both
        };
        assert!(!passes(&record, &one_wrong));
    }
}
