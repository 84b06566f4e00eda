//! Aggregate statistics over the full candidate collection.
//!
//! Aggregation ignores any active query: it always runs over every record.
//! Values are counted under whatever literal they carry, so an unknown
//! stage label or an unparsed experience value gets its own bucket instead
//! of being dropped or merged.

use data_loader::{CandidateRecord, Experience, RawCandidate, StageResult, normalize_all};
use indexmap::IndexMap;
use std::hash::Hash;

/// Label -> count, iterated in the order labels were first seen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution<K: Hash + Eq> {
    counts: IndexMap<K, usize>,
}

impl<K: Hash + Eq> Distribution<K> {
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    /// Count one more occurrence of `label`
    pub fn increment(&mut self, label: K) {
        *self.counts.entry(label).or_insert(0) += 1;
    }

    /// Make sure `label` is present, with a zero count if never seen
    pub fn ensure(&mut self, label: K) {
        self.counts.entry(label).or_insert(0);
    }

    /// Count for `label` (zero if absent)
    pub fn get(&self, label: &K) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(label, count)| (label, *count))
    }

    pub fn labels(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl<K: Hash + Eq> Default for Distribution<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> FromIterator<K> for Distribution<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for label in iter {
            distribution.increment(label);
        }
        distribution
    }
}

/// Pass or Fail counts for both hiring stages, side by side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCounts {
    pub label: StageResult,
    pub video_interview: usize,
    pub coding_test: usize,
}

/// Everything the analytics dashboard draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
    /// Video interview outcome per record. Pass, Fail and Pending are
    /// always present; unknown labels follow in first-seen order.
    pub result_counts: Distribution<StageResult>,
    /// One entry for Pass, one for Fail. Pending is not charted.
    pub pass_fail_by_stage: Vec<StageCounts>,
    /// Records per skill (case-sensitive, as stored)
    pub skills_frequency: Distribution<String>,
    /// Records per experience value, not bucketed into ranges
    pub experience_distribution: Distribution<Experience>,
    /// Records per location (exact, case-sensitive)
    pub location_distribution: Distribution<String>,
}

/// Reduces a candidate collection into count distributions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregationEngine;

impl AggregationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Normalize `raw` and aggregate it
    pub fn aggregate(&self, raw: &[RawCandidate]) -> AggregationResult {
        self.aggregate_records(&normalize_all(raw))
    }

    /// Aggregate already-normalized records
    pub fn aggregate_records(&self, records: &[CandidateRecord]) -> AggregationResult {
        let mut result_counts = Distribution::new();
        for known in StageResult::KNOWN {
            result_counts.ensure(known);
        }

        let mut coding_counts: Distribution<StageResult> = Distribution::new();
        let mut skills_frequency = Distribution::new();
        let mut experience_distribution = Distribution::new();
        let mut location_distribution = Distribution::new();

        for record in records {
            result_counts.increment(record.video_interview_result.clone());
            coding_counts.increment(record.coding_result.clone());
            // Skills are de-duplicated by the normalizer, so each record
            // contributes at most once per skill
            for skill in &record.skills {
                skills_frequency.increment(skill.clone());
            }
            experience_distribution.increment(record.years_of_experience.clone());
            location_distribution.increment(record.location.clone());
        }

        let pass_fail_by_stage = [StageResult::Pass, StageResult::Fail]
            .into_iter()
            .map(|label| StageCounts {
                video_interview: result_counts.get(&label),
                coding_test: coding_counts.get(&label),
                label,
            })
            .collect();

        tracing::debug!(
            "Aggregated {} candidates: {} skills, {} experience values, {} locations",
            records.len(),
            skills_frequency.len(),
            experience_distribution.len(),
            location_distribution.len()
        );

        AggregationResult {
            result_counts,
            pass_fail_by_stage,
            skills_frequency,
            experience_distribution,
            location_distribution,
        }
    }
}

/// Aggregate the full raw collection
pub fn aggregate(raw: &[RawCandidate]) -> AggregationResult {
    AggregationEngine::new().aggregate(raw)
}
