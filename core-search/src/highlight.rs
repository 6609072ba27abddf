//! Match highlighting for display
//!
//! Splits a line into alternating plain and matched pieces. Highlighting is
//! always case-insensitive and literal, independent of the options the
//! search ran with.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Split `text` around every occurrence of `query`
///
/// Concatenating the segment texts always reproduces `text`. An empty query
/// yields a single unmatched segment.
pub fn segments(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() {
        return vec![Segment::plain(text)];
    }

    let regex = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => regex,
        Err(e) => {
            tracing::warn!(error = %e, "Highlight pattern rejected; rendering plain text");
            return vec![Segment::plain(text)];
        }
    };

    let mut out = Vec::new();
    let mut last = 0;
    for m in regex.find_iter(text) {
        if m.start() > last {
            out.push(Segment::plain(&text[last..m.start()]));
        }
        out.push(Segment::matched(m.as_str()));
        last = m.end();
    }
    if last < text.len() || out.is_empty() {
        out.push(Segment::plain(&text[last..]));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_empty_query() {
        let result = segments("Hello World", "");
        assert_eq!(result, vec![Segment::plain("Hello World")]);
        assert!(result.iter().all(|s| !s.matched));
    }

    #[test]
    fn test_marks_every_occurrence_case_insensitively() {
        let result = segments("Hello hello HELLO", "hello");
        let matched: Vec<_> = result
            .iter()
            .filter(|s| s.matched)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(matched, vec!["Hello", "hello", "HELLO"]);
        assert_eq!(joined(&result), "Hello hello HELLO");
    }

    #[test]
    fn test_match_in_the_middle() {
        let result = segments("I am cold today", "cold");
        assert_eq!(
            result,
            vec![
                Segment::plain("I am "),
                Segment::matched("cold"),
                Segment::plain(" today"),
            ]
        );
    }

    #[test]
    fn test_whole_line_match() {
        assert_eq!(segments("a.b*c", "a.b*c"), vec![Segment::matched("a.b*c")]);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let result = segments("aXbYc", "a.b*c");
        assert!(result.iter().all(|s| !s.matched));
        assert_eq!(joined(&result), "aXbYc");
    }

    #[test]
    fn test_no_match_and_empty_text() {
        assert_eq!(segments("warm", "cold"), vec![Segment::plain("warm")]);
        assert_eq!(segments("", "cold"), vec![Segment::plain("")]);
    }

    #[test]
    fn test_multibyte_text() {
        let result = segments("Café CAFÉ", "café");
        assert_eq!(joined(&result), "Café CAFÉ");
        assert_eq!(result.iter().filter(|s| s.matched).count(), 2);
    }
}
