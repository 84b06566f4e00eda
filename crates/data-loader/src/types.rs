//! Core domain types for candidate tracking.
//!
//! Two shapes of the same candidate live here:
//! - [`RawCandidate`] is whatever the upstream store handed us. Every field
//!   is optional and loosely typed.
//! - [`CandidateRecord`] is the normalized form every query and aggregation
//!   works on. It is only ever produced by [`crate::normalize`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque unique identifier for a candidate
pub type CandidateId = String;

// =============================================================================
// Stage results
// =============================================================================

/// Outcome of a hiring stage (coding test, video interview).
///
/// Labels are matched exactly and case-sensitively. Anything the upstream
/// store sends that is not one of the three known labels is kept verbatim
/// in `Other` so it can still be counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StageResult {
    Pass,
    Fail,
    Pending,
    Other(String),
}

impl StageResult {
    /// The three labels a well-formed record can carry, in chart order
    pub const KNOWN: [StageResult; 3] = [StageResult::Pass, StageResult::Fail, StageResult::Pending];

    /// Map a literal label onto a result
    pub fn from_label(label: &str) -> Self {
        match label {
            "Pass" => StageResult::Pass,
            "Fail" => StageResult::Fail,
            "Pending" => StageResult::Pending,
            other => StageResult::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StageResult::Pass => "Pass",
            StageResult::Fail => "Fail",
            StageResult::Pending => "Pending",
            StageResult::Other(label) => label,
        }
    }
}

impl From<String> for StageResult {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Pass" => StageResult::Pass,
            "Fail" => StageResult::Fail,
            "Pending" => StageResult::Pending,
            _ => StageResult::Other(label),
        }
    }
}

impl From<StageResult> for String {
    fn from(result: StageResult) -> Self {
        match result {
            StageResult::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Experience
// =============================================================================

/// Years of experience as it arrived from upstream.
///
/// The value is never coerced: a non-negative integer is `Years`, anything
/// else keeps its literal text in `Unparsed` (an absent value is
/// `Unparsed("")`).
///
/// The derived ordering puts every `Years` value before every `Unparsed`
/// value. Numbers compare numerically, literals compare as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Experience {
    Years(u64),
    Unparsed(String),
}

impl Experience {
    /// Numeric value, if this is a valid count of years
    pub fn years(&self) -> Option<u64> {
        match self {
            Experience::Years(years) => Some(*years),
            Experience::Unparsed(_) => None,
        }
    }
}

impl Default for Experience {
    fn default() -> Self {
        Experience::Unparsed(String::new())
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experience::Years(years) => write!(f, "{}", years),
            Experience::Unparsed(literal) => f.write_str(literal),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// A candidate exactly as the upstream store sent it.
///
/// Nothing here is trusted: any field may be missing, null, or of the wrong
/// JSON type. Run it through [`crate::normalize`] before looking at it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCandidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Document stores send `_id`. Used when `id` is absent.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding_result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_interview_result: Option<Value>,
}

/// A normalized candidate. Every field is present and typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    /// Distinct skill names in the order they were first listed
    pub skills: Vec<String>,
    pub years_of_experience: Experience,
    pub location: String,
    pub coding_result: StageResult,
    pub video_interview_result: StageResult,
}

impl CandidateRecord {
    /// "First Last", as shown in the candidate table
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Skills joined for display
    pub fn skills_display(&self) -> String {
        self.skills.join(" ")
    }
}
