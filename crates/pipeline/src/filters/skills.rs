//! Column filter on skills.
//!
//! The skill list is read as one comma-joined string and split back into
//! trimmed, lowercased tokens. The filter value must equal one whole token:
//! `"go"` matches a candidate with `Go`, `"Ru"` does not match `Rust`.

use crate::params::QueryParams;
use crate::traits::Filter;
use data_loader::CandidateRecord;

/// Skill tokens as the filter sees them
pub fn skill_tokens(record: &CandidateRecord) -> Vec<String> {
    record
        .skills
        .join(",")
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .collect()
}

pub fn has_skill(record: &CandidateRecord, skill: &str) -> bool {
    if skill.is_empty() {
        return true;
    }
    let wanted = skill.to_lowercase();
    skill_tokens(record).iter().any(|token| *token == wanted)
}

pub struct SkillsFilter;

impl Filter for SkillsFilter {
    fn name(&self) -> &str {
        "SkillsFilter"
    }

    fn is_active(&self, params: &QueryParams) -> bool {
        !params.filters.skills.is_empty()
    }

    fn keep(&self, record: &CandidateRecord, params: &QueryParams) -> bool {
        has_skill(record, &params.filters.skills)
    }
}
