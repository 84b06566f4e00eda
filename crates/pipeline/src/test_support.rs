//! Record builders shared by the unit tests.

use data_loader::{CandidateRecord, Experience, StageResult};

pub(crate) fn candidate(
    first_name: &str,
    last_name: &str,
    skills: &[&str],
    experience: Experience,
    location: &str,
) -> CandidateRecord {
    CandidateRecord {
        id: format!("{}-{}", first_name, last_name).to_lowercase(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        years_of_experience: experience,
        location: location.to_string(),
        coding_result: StageResult::Pending,
        video_interview_result: StageResult::Pending,
    }
}

pub(crate) fn years(value: u64) -> Experience {
    Experience::Years(value)
}
