//! Chart-ready views of an [`AggregationResult`].
//!
//! Each distribution becomes a list of `{ name, value }` points in
//! first-seen order, the shape bar and pie charts consume directly.

use crate::aggregation::{AggregationResult, Distribution};
use data_loader::Experience;
use serde::Serialize;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: usize,
}

/// One group of the Pass/Fail bar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageBar {
    pub name: String,
    pub video_interview: usize,
    pub coding_test: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub video_interview_results: Vec<ChartPoint>,
    pub pass_fail_by_stage: Vec<StageBar>,
    pub skills: Vec<ChartPoint>,
    pub years_of_experience: Vec<ChartPoint>,
    pub locations: Vec<ChartPoint>,
}

impl<K: Hash + Eq> Distribution<K> {
    /// Chart points, naming each label with `name`
    pub fn chart_points(&self, name: impl Fn(&K) -> String) -> Vec<ChartPoint> {
        self.iter()
            .map(|(label, value)| ChartPoint {
                name: name(label),
                value,
            })
            .collect()
    }
}

impl AggregationResult {
    pub fn chart_data(&self) -> ChartData {
        ChartData {
            video_interview_results: self.result_counts.chart_points(|label| label.to_string()),
            pass_fail_by_stage: self
                .pass_fail_by_stage
                .iter()
                .map(|stage| StageBar {
                    name: stage.label.to_string(),
                    video_interview: stage.video_interview,
                    coding_test: stage.coding_test,
                })
                .collect(),
            skills: self.skills_frequency.chart_points(|skill| skill.clone()),
            years_of_experience: self
                .experience_distribution
                .chart_points(experience_label),
            locations: self.location_distribution.chart_points(|location| location.clone()),
        }
    }
}

/// Unparsed values keep their literal but never share a label with a number
fn experience_label(experience: &Experience) -> String {
    match experience {
        Experience::Years(years) => format!("{} years", years),
        Experience::Unparsed(literal) if literal.is_empty() => "(missing)".to_string(),
        Experience::Unparsed(literal) => format!("{} (unparsed)", literal),
    }
}
