//! Parser for candidate collections.
//!
//! The upstream store returns one JSON array with one object per candidate:
//!
//! ```text
//! [{ "_id": "...", "firstName": "...", "lastName": "...", "skills": ["..."],
//!    "yearsOfExperience": 3, "location": "...",
//!    "codingResult": "Pass", "videoInterviewResult": "Pending" }, ...]
//! ```
//!
//! Only a broken document is an error. An element that is not an object
//! (or whose fields cannot be read at all) becomes an empty record so that
//! it is still counted, and a warning is logged.

use crate::error::{DataLoadError, Result};
use crate::types::RawCandidate;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Parse a candidate collection from a JSON string
pub fn parse_candidates(input: &str) -> Result<Vec<RawCandidate>> {
    let document: Value = serde_json::from_str(input)?;
    candidates_from_value(document)
}

/// Parse a candidate collection from any reader
pub fn read_candidates<R: Read>(reader: R) -> Result<Vec<RawCandidate>> {
    let document: Value = serde_json::from_reader(reader)?;
    candidates_from_value(document)
}

/// Load a candidate collection from a JSON file on disk
pub fn load_from_file(path: &Path) -> Result<Vec<RawCandidate>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let candidates = read_candidates(BufReader::new(file))?;
    tracing::info!(
        "Loaded {} candidates from {}",
        candidates.len(),
        path.display()
    );
    Ok(candidates)
}

fn candidates_from_value(document: Value) -> Result<Vec<RawCandidate>> {
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(DataLoadError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    let candidates = items
        .into_iter()
        .enumerate()
        .map(|(position, item)| {
            let kind = json_kind(&item);
            serde_json::from_value::<RawCandidate>(item).unwrap_or_else(|e| {
                tracing::warn!(
                    "Candidate at position {} is unreadable ({}: {}), keeping an empty record",
                    position,
                    kind,
                    e
                );
                RawCandidate::default()
            })
        })
        .collect();

    Ok(candidates)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
