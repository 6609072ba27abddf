//! Three-way view of a search result for presentation layers

use core_library::LyricRecord;
use serde::Serialize;

/// Distinguishes "nothing asked", "nothing found" and "found something"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "results", rename_all = "snake_case")]
pub enum SearchOutcome {
    NotSearched,
    NoResults,
    Found(Vec<LyricRecord>),
}

impl SearchOutcome {
    pub fn count(&self) -> usize {
        match self {
            SearchOutcome::Found(records) => records.len(),
            _ => 0,
        }
    }

    pub fn is_searched(&self) -> bool {
        !matches!(self, SearchOutcome::NotSearched)
    }

    pub fn records(&self) -> &[LyricRecord] {
        match self {
            SearchOutcome::Found(records) => records,
            _ => &[],
        }
    }

    /// "Found N result(s)" style summary; `None` before any search
    pub fn summary(&self) -> Option<String> {
        match self {
            SearchOutcome::NotSearched => None,
            SearchOutcome::NoResults => Some("No results found".to_string()),
            SearchOutcome::Found(records) if records.len() == 1 => {
                Some("Found 1 result".to_string())
            }
            SearchOutcome::Found(records) => Some(format!("Found {} results", records.len())),
        }
    }
}

impl From<Option<Vec<LyricRecord>>> for SearchOutcome {
    fn from(results: Option<Vec<LyricRecord>>) -> Self {
        match results {
            None => SearchOutcome::NotSearched,
            Some(records) if records.is_empty() => SearchOutcome::NoResults,
            Some(records) => SearchOutcome::Found(records),
        }
    }
}
