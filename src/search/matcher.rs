use regex::{Regex, RegexBuilder};

/// A piece of a text run after matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text kept as-is
    Literal(&'a str),
    /// Text that matched the query
    Highlight(&'a str),
}

/// Finds all occurrences of a query in text (case-insensitive, literal)
///
/// The query is escaped before compiling, so characters like `.` or `(` match
/// themselves.
#[derive(Debug, Clone)]
pub struct SearchMatcher {
    regex: Regex,
}

impl SearchMatcher {
    /// Builds a matcher for `query`, or `None` for an empty query
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }

        RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .ok()
            .map(|regex| Self { regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Number of non-overlapping matches in `text`
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Splits `text` into literal and matched pieces, in order
    ///
    /// Concatenating the pieces always gives back `text`.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for found in self.regex.find_iter(text) {
            if found.start() > last_end {
                segments.push(Segment::Literal(&text[last_end..found.start()]));
            }
            segments.push(Segment::Highlight(found.as_str()));
            last_end = found.end();
        }

        if last_end < text.len() {
            segments.push(Segment::Literal(&text[last_end..]));
        }

        segments
    }
}
