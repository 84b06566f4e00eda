//! # Data Loader Crate
//!
//! This crate turns the candidate collection handed over by the upstream
//! store into records the query engine can trust.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (RawCandidate, CandidateRecord, Experience, StageResult)
//! - **normalizer**: Repair raw candidates into fully-populated records
//! - **parser**: Read a JSON array of candidates from a string, reader or file
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{load_from_file, normalize_all};
//! use std::path::Path;
//!
//! let raw = load_from_file(Path::new("data/candidates.json"))?;
//! let records = normalize_all(&raw);
//!
//! println!("{} has {} skills", records[0].full_name(), records[0].skills.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod normalizer;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use normalizer::{normalize, normalize_all};
pub use parser::{load_from_file, parse_candidates, read_candidates};
pub use types::{
    // Type aliases
    CandidateId,
    // Core types
    CandidateRecord,
    RawCandidate,
    // Field types
    Experience,
    StageResult,
};
