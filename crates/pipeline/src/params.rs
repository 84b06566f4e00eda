//! Query parameters: free-text search, column filters and sort spec.
//!
//! A [`QueryParams`] is a plain value. Edits never patch it in place; every
//! builder method hands back a new value that replaces the old one.

use crate::error::{QueryError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A column the candidate table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    FirstName,
    LastName,
    Skills,
    YearsOfExperience,
    Location,
    CodingResult,
    VideoInterviewResult,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::FirstName,
        SortKey::LastName,
        SortKey::Skills,
        SortKey::YearsOfExperience,
        SortKey::Location,
        SortKey::CodingResult,
        SortKey::VideoInterviewResult,
    ];

    /// Record field name, as it appears in the JSON shape
    pub fn field_name(&self) -> &'static str {
        match self {
            SortKey::FirstName => "firstName",
            SortKey::LastName => "lastName",
            SortKey::Skills => "skills",
            SortKey::YearsOfExperience => "yearsOfExperience",
            SortKey::Location => "location",
            SortKey::CodingResult => "codingResult",
            SortKey::VideoInterviewResult => "videoInterviewResult",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Accepts the field name in camelCase, kebab-case or snake_case
impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        SortKey::ALL
            .into_iter()
            .find(|key| key.field_name().to_lowercase() == folded)
            .ok_or_else(|| QueryError::UnknownSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply this direction to an ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(QueryError::UnknownDirection(s.to_string())),
        }
    }
}

/// Active sort column (if any) and direction.
///
/// The direction is one shared flag, not per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// The spec after a "sort by `key`" request.
    ///
    /// The stored direction always flips, whether or not `key` was already
    /// the active column. Starting from the default (no key, ascending), the
    /// first request therefore sorts descending.
    pub fn toggled(self, key: SortKey) -> Self {
        Self {
            key: Some(key),
            direction: self.direction.flipped(),
        }
    }
}

/// Per-column constraints, combined with AND.
///
/// An empty string means "no constraint" for that column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnFilters {
    /// Substring of first or last name, case-insensitive
    pub name: String,
    /// One full skill name, case-insensitive
    pub skills: String,
    /// Substring of location, case-insensitive
    pub location: String,
    /// Substring of the experience value's text form
    pub experience: String,
}

impl ColumnFilters {
    /// True when no column carries a constraint
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.skills.is_empty()
            && self.location.is_empty()
            && self.experience.is_empty()
    }
}

/// Everything a query needs besides the records themselves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    pub search_term: String,
    pub filters: ColumnFilters,
    pub sort: SortSpec,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self
        }
    }

    pub fn with_filters(self, filters: ColumnFilters) -> Self {
        Self { filters, ..self }
    }

    pub fn with_sort(self, sort: SortSpec) -> Self {
        Self { sort, ..self }
    }

    /// The params after a "sort by `key`" request (see [`SortSpec::toggled`])
    pub fn sort_toggled(&self, key: SortKey) -> Self {
        Self {
            sort: self.sort.toggled(key),
            ..self.clone()
        }
    }

    /// True when the search term or any column filter is non-empty
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty() || !self.filters.is_empty()
    }
}
