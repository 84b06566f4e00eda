//! Property tests for the query and aggregation engine.
//!
//! Random collections mix well-formed and odd values (unparsed experience,
//! unknown stage labels, case variants of the same skill) so that the
//! invariants are checked on the inputs most likely to break them.

use data_loader::{RawCandidate, normalize_all};
use pipeline::{
    ColumnFilters, QueryParams, SortDirection, SortKey, SortSpec, aggregate, compare, matches,
    passes, query,
};
use proptest::prelude::*;
use serde_json::Value;
use std::cmp::Ordering;

fn experience() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => (0u64..40).prop_map(Value::from),
        1 => "[a-z]{0,4}".prop_map(Value::from),
    ]
}

fn stage() -> impl Strategy<Value = Value> {
    prop_oneof![Just("Pass"), Just("Fail"), Just("Pending"), Just("On hold")].prop_map(Value::from)
}

fn candidate() -> impl Strategy<Value = RawCandidate> {
    (
        "[A-Za-z]{0,6}",
        "[A-Za-z]{0,6}",
        prop::collection::vec(prop::sample::select(vec!["Go", "go", "Rust", "SQL", "C++"]), 0..4),
        experience(),
        prop::sample::select(vec!["NY", "SF", "Berlin", "new york", ""]),
        stage(),
        stage(),
    )
        .prop_map(|(first, last, skills, years, location, coding, video)| RawCandidate {
            id: None,
            document_id: None,
            first_name: Some(Value::from(first)),
            last_name: Some(Value::from(last)),
            skills: Some(Value::from(skills)),
            years_of_experience: Some(years),
            location: Some(Value::from(location)),
            coding_result: Some(coding),
            video_interview_result: Some(video),
        })
}

fn collection() -> impl Strategy<Value = Vec<RawCandidate>> {
    prop::collection::vec(candidate(), 0..25)
}

fn short_term() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z0-9]{1,2}"]
}

fn params() -> impl Strategy<Value = QueryParams> {
    (
        short_term(),
        short_term(),
        prop_oneof![Just(String::new()), Just("go".to_string()), Just("rust".to_string())],
        short_term(),
        short_term(),
    )
        .prop_map(|(search, name, skills, location, experience)| {
            QueryParams::new()
                .with_search_term(search)
                .with_filters(ColumnFilters {
                    name,
                    skills,
                    location,
                    experience,
                })
        })
}

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

proptest! {
    #[test]
    fn query_is_exactly_the_matching_subsequence(raw in collection(), params in params()) {
        let expected: Vec<_> = normalize_all(&raw)
            .into_iter()
            .filter(|r| matches(r, &params.search_term) && passes(r, &params.filters))
            .collect();

        prop_assert_eq!(query(&raw, &params), expected);
    }

    #[test]
    fn query_is_deterministic_and_pure(raw in collection(), params in params(), key in sort_key()) {
        let params = params.with_sort(SortSpec::new(key, SortDirection::Asc));
        let before = raw.clone();

        let first = query(&raw, &params);
        let second = query(&raw, &params);

        prop_assert_eq!(&raw, &before);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn descending_reverses_ascending(raw in collection(), params in params(), key in sort_key()) {
        let asc = query(&raw, &params.clone().with_sort(SortSpec::new(key, SortDirection::Asc)));
        let desc = query(&raw, &params.with_sort(SortSpec::new(key, SortDirection::Desc)));

        prop_assert_eq!(asc.len(), desc.len());
        for (d, a) in desc.iter().zip(asc.iter().rev()) {
            prop_assert_eq!(compare(d, a, key), Ordering::Equal);
        }
    }

    #[test]
    fn result_counts_cover_every_record(raw in collection()) {
        let result = aggregate(&raw);
        prop_assert_eq!(result.result_counts.total(), raw.len());

        for stage in &result.pass_fail_by_stage {
            prop_assert!(stage.video_interview + stage.coding_test <= 2 * raw.len());
        }
        let video_pass_fail: usize = result.pass_fail_by_stage.iter().map(|s| s.video_interview).sum();
        let coding_pass_fail: usize = result.pass_fail_by_stage.iter().map(|s| s.coding_test).sum();
        prop_assert!(video_pass_fail <= raw.len());
        prop_assert!(coding_pass_fail <= raw.len());
    }

    #[test]
    fn skill_counts_match_records(raw in collection()) {
        let records = normalize_all(&raw);
        let result = aggregate(&raw);

        for (skill, count) in result.skills_frequency.iter() {
            let holders = records.iter().filter(|r| r.skills.contains(skill)).count();
            prop_assert_eq!(count, holders);
        }
        prop_assert_eq!(result.experience_distribution.total(), raw.len());
        prop_assert_eq!(result.location_distribution.total(), raw.len());
    }
}
