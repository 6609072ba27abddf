//! Query matching
//!
//! A [`QueryMatcher`] is compiled once per query and then applied to every
//! record of the corpus. It never reorders its input, so results come back in
//! whatever order the corpus store produced them, which is canonical order.

use crate::error::{Result, SearchError};
use crate::options::{MatchMode, SearchOptions};
use core_library::LyricRecord;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
enum Predicate {
    /// Whitespace-delimited `\b<escaped query>\b` over lower-cased text
    ExactWord(Regex),
    CaseSensitive(String),
    /// Holds the lower-cased query
    CaseInsensitive(String),
}

/// Compiled match predicate for one query
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    query: String,
    mode: MatchMode,
    predicate: Predicate,
}

impl QueryMatcher {
    /// Compile a matcher for `query`
    ///
    /// Returns `Ok(None)` for an empty query: no search is performed. Any
    /// other string is a valid query; pattern metacharacters are escaped and
    /// match literally.
    ///
    /// # Errors
    /// Only fails if the compiled word pattern exceeds the regex size limit,
    /// which callers avoid by bounding query length.
    pub fn new(query: &str, options: SearchOptions) -> Result<Option<Self>> {
        if query.is_empty() {
            return Ok(None);
        }

        let mode = options.mode();
        let predicate = match mode {
            MatchMode::ExactWord => {
                let regex = RegexBuilder::new(&word_pattern(query))
                    .build()
                    .map_err(|e| SearchError::Pattern(e.to_string()))?;
                Predicate::ExactWord(regex)
            }
            MatchMode::CaseSensitive => Predicate::CaseSensitive(query.to_string()),
            MatchMode::CaseInsensitive => Predicate::CaseInsensitive(query.to_lowercase()),
        };

        Ok(Some(Self {
            query: query.to_string(),
            mode,
            predicate,
        }))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether a single line of text satisfies the predicate
    pub fn is_match(&self, text: &str) -> bool {
        match &self.predicate {
            Predicate::ExactWord(regex) => regex.is_match(&text.to_lowercase()),
            Predicate::CaseSensitive(query) => text.contains(query.as_str()),
            Predicate::CaseInsensitive(query) => text.to_lowercase().contains(query.as_str()),
        }
    }

    /// Keep the matching records, preserving input order
    pub fn filter(&self, records: Vec<LyricRecord>) -> Vec<LyricRecord> {
        records
            .into_iter()
            .filter(|record| self.is_match(&record.text))
            .collect()
    }
}

/// A standalone word sits between whitespace or the ends of the text, and
/// must also start and end on a word boundary.
fn word_pattern(query: &str) -> String {
    format!(
        r"(?:^|\s)\b{}\b(?:\s|$)",
        regex::escape(&query.to_lowercase())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(query: &str, options: SearchOptions) -> QueryMatcher {
        QueryMatcher::new(query, options).unwrap().unwrap()
    }

    fn matches(query: &str, options: SearchOptions, text: &str) -> bool {
        matcher(query, options).is_match(text)
    }

    #[test]
    fn test_empty_query_is_no_search() {
        for options in [
            SearchOptions::default(),
            SearchOptions::case_sensitive(),
            SearchOptions::exact_word(),
        ] {
            assert!(QueryMatcher::new("", options).unwrap().is_none());
        }
    }

    #[test]
    fn test_whitespace_query_is_a_search() {
        let m = matcher(" ", SearchOptions::default());
        assert!(m.is_match("two words"));
        assert!(!m.is_match("oneword"));
    }

    #[test]
    fn test_case_modes() {
        let text = "Hello World";
        assert!(matches("hello", SearchOptions::default(), text));
        assert!(!matches("hello", SearchOptions::case_sensitive(), text));
        assert!(matches("Hello", SearchOptions::case_sensitive(), text));
        assert!(matches("LO WOR", SearchOptions::default(), text));
    }

    #[test]
    fn test_word_boundaries() {
        let exact = SearchOptions::exact_word();
        assert!(matches("cold", exact, "I am cold today"));
        assert!(!matches("col", exact, "I am cold today"));
        assert!(!matches("cold", exact, "coldly"));
        assert!(matches("cold", exact, "cold"));
        assert!(matches("cold", exact, "so cold"));
        assert!(matches("cold", exact, "cold\tand dark"));
        assert!(matches("am cold", exact, "I am cold today"));
    }

    #[test]
    fn test_word_must_be_whitespace_delimited() {
        let exact = SearchOptions::exact_word();
        assert!(!matches("cold", exact, "so cold-hearted"));
        assert!(!matches("cold", exact, "I am cold, today"));
        assert!(!matches("cold", exact, "(cold)"));
        assert!(!matches("cold", exact, "so cold."));
        assert!(matches("cold", exact, "cold-hearted and cold inside"));

        // Substring modes are unaffected.
        assert!(matches("cold", SearchOptions::default(), "so cold-hearted"));
    }

    #[test]
    fn test_substring_modes_match_inside_words() {
        assert!(matches("col", SearchOptions::default(), "I am cold today"));
        assert!(matches("cold", SearchOptions::case_sensitive(), "coldly"));
    }

    #[test]
    fn test_exact_word_ignores_case_sensitivity() {
        let options = SearchOptions::new(true, true);
        assert_eq!(matcher("COLD", options).mode(), MatchMode::ExactWord);
        assert!(matches("COLD", options, "I am cold today"));
        assert!(matches("cold", options, "COLD COFFEE"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let exact = SearchOptions::exact_word();
        assert!(matches("a.b*c", exact, "a.b*c"));
        assert!(!matches("a.b*c", exact, "aXbYc"));
        assert!(!matches("a.b*c", exact, "aXbYc is not the same"));

        assert!(matches("a.b*c", SearchOptions::default(), "x a.b*c y"));
        assert!(!matches("a.b*c", SearchOptions::default(), "aXbYc"));
    }

    #[test]
    fn test_pattern_syntax_never_fails() {
        for query in ["(", "[", "\\", "a{2", "*", "+?", "$^", "|", ")]}"] {
            for options in [
                SearchOptions::default(),
                SearchOptions::case_sensitive(),
                SearchOptions::exact_word(),
            ] {
                let m = QueryMatcher::new(query, options).unwrap();
                assert!(m.is_some(), "query {:?}", query);
            }
        }
        assert!(matches("(", SearchOptions::default(), "a (b)"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let records: Vec<LyricRecord> = ["cold one", "warm", "cold two", "cold three"]
            .iter()
            .enumerate()
            .map(|(i, text)| LyricRecord {
                lyric_id: i as i64 + 1,
                line_number: i as i64 + 1,
                text: text.to_string(),
                song_id: 1,
                song_name: "Song".to_string(),
                song_number: 1,
                album_id: 1,
                album_name: "Album".to_string(),
            })
            .collect();

        let m = matcher("cold", SearchOptions::exact_word());
        let ids: Vec<_> = m.filter(records).into_iter().map(|r| r.lyric_id).collect();

        assert_eq!(ids, vec![1, 3, 4]);
    }
}
