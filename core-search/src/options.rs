//! Per-query match options

use serde::{Deserialize, Serialize};

/// Match flags supplied with every query
///
/// The flags are independent. `exact_word` takes precedence when selecting
/// the matching algorithm, and exact-word matching ignores `case_sensitive`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub exact_word: bool,
}

impl SearchOptions {
    pub fn new(case_sensitive: bool, exact_word: bool) -> Self {
        Self {
            case_sensitive,
            exact_word,
        }
    }

    pub fn case_sensitive() -> Self {
        Self::new(true, false)
    }

    pub fn exact_word() -> Self {
        Self::new(false, true)
    }

    /// The algorithm these flags select
    pub fn mode(&self) -> MatchMode {
        if self.exact_word {
            MatchMode::ExactWord
        } else if self.case_sensitive {
            MatchMode::CaseSensitive
        } else {
            MatchMode::CaseInsensitive
        }
    }
}

/// One of the three mutually exclusive matching algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Whole word, case-insensitive
    ExactWord,
    /// Substring, respecting case
    CaseSensitive,
    /// Substring, ignoring case
    CaseInsensitive,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::ExactWord => "exact_word",
            MatchMode::CaseSensitive => "case_sensitive",
            MatchMode::CaseInsensitive => "case_insensitive",
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
