//! Repairs raw candidates into fully-populated [`CandidateRecord`]s.
//!
//! Normalization never fails. Missing strings become `""`, missing skills
//! become an empty list, and values of the wrong JSON type are stringified
//! where that is meaningful. Experience and stage results are carried
//! through literally, not coerced.

use crate::types::{CandidateRecord, Experience, RawCandidate, StageResult};
use serde_json::Value;

/// Normalize one raw candidate.
///
/// Pure function of its input; the raw record is left untouched.
pub fn normalize(raw: &RawCandidate) -> CandidateRecord {
    CandidateRecord {
        id: text_field(present(raw.id.as_ref()).or(present(raw.document_id.as_ref()))),
        first_name: text_field(raw.first_name.as_ref()),
        last_name: text_field(raw.last_name.as_ref()),
        skills: skills_field(raw.skills.as_ref()),
        years_of_experience: experience_field(raw.years_of_experience.as_ref()),
        location: text_field(raw.location.as_ref()),
        coding_result: stage_field(raw.coding_result.as_ref()),
        video_interview_result: stage_field(raw.video_interview_result.as_ref()),
    }
}

/// Normalize a whole collection, preserving input order
pub fn normalize_all(raw: &[RawCandidate]) -> Vec<CandidateRecord> {
    raw.iter().map(normalize).collect()
}

/// A JSON null counts as absent
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

/// Scalars become their text form; null, arrays and objects become `""`
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text_field(value: Option<&Value>) -> String {
    value.and_then(scalar_text).unwrap_or_default()
}

/// Skills form a set: duplicates are dropped, first occurrence wins.
///
/// A comma-delimited string is accepted and split into trimmed entries.
fn skills_field(value: Option<&Value>) -> Vec<String> {
    let entries: Vec<String> = match present(value) {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(Value::String(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect(),
        Some(other) => scalar_text(other).into_iter().collect(),
        None => Vec::new(),
    };

    let mut skills: Vec<String> = Vec::with_capacity(entries.len());
    for skill in entries {
        if !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills
}

fn experience_field(value: Option<&Value>) -> Experience {
    match present(value) {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(years) => Experience::Years(years),
            None => Experience::Unparsed(n.to_string()),
        },
        Some(other) => Experience::Unparsed(scalar_text(other).unwrap_or_else(|| other.to_string())),
        None => Experience::default(),
    }
}

fn stage_field(value: Option<&Value>) -> StageResult {
    match present(value) {
        Some(Value::String(label)) => StageResult::from_label(label),
        Some(other) => StageResult::Other(scalar_text(other).unwrap_or_else(|| other.to_string())),
        None => StageResult::Other(String::new()),
    }
}
