//! Search bar and status filter matching
//!
//! Every list view narrows its records the same way: a free-text query that
//! must hit the record's name or one of its tags, and a status filter that is
//! either `all` or one normalized status key. Input order is kept.

/// A record that the list search bar can match.
pub trait Searchable {
    /// Primary text matched by the query.
    fn name(&self) -> &str;

    /// Secondary texts; a hit on any one of them counts.
    fn tags(&self) -> &[String];

    /// Status label as displayed (e.g. "In Progress").
    fn status_label(&self) -> &str;
}

/// Normalize a status label for comparison: lower-case, with whitespace and
/// punctuation dropped, so "Almost Done" and "almostdone" compare equal.
pub fn status_key(label: &str) -> String {
    label
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Normalized status key
    Only(String),
}

impl StatusFilter {
    /// Build a filter from user input. Empty input and the `all` sentinel
    /// both disable status filtering.
    pub fn parse(value: &str) -> Self {
        let key = status_key(value);
        if key.is_empty() || key == "all" {
            StatusFilter::All
        } else {
            StatusFilter::Only(key)
        }
    }

    pub fn key(&self) -> &str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(key) => key.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }

    pub fn matches(&self, label: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(key) => status_key(label) == *key,
        }
    }

    /// Step to the next entry of `options` (keys, `all` first), wrapping.
    pub fn cycle(&self, options: &[&str]) -> Self {
        if options.is_empty() {
            return StatusFilter::All;
        }
        let current = options
            .iter()
            .position(|option| status_key(option) == self.key())
            .unwrap_or(0);
        StatusFilter::parse(options[(current + 1) % options.len()])
    }
}

/// Query text plus status filter, as held by one list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub status: StatusFilter,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, StatusFilter::All)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.status.is_all()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        self.matches_text(record) && self.status.matches(record.status_label())
    }

    fn matches_text<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        contains_case_insensitive(record.name(), &needle)
            || record
                .tags()
                .iter()
                .any(|tag| contains_case_insensitive(tag, &needle))
    }
}

/// Positions of the records that pass `query`, in input order.
pub fn matching_indices<T: Searchable>(records: &[T], query: &SearchQuery) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| query.matches(*record))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &SearchQuery) -> Vec<&'a T> {
    records.iter().filter(|record| query.matches(*record)).collect()
}

/// `needle` must already be lower-case.
fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        tags: Vec<String>,
        status: String,
    }

    impl Row {
        fn new(name: &str, tags: &[&str], status: &str) -> Self {
            Self {
                name: name.to_string(),
                tags: tags.iter().map(|tag| tag.to_string()).collect(),
                status: status.to_string(),
            }
        }
    }

    impl Searchable for Row {
        fn name(&self) -> &str {
            &self.name
        }

        fn tags(&self) -> &[String] {
            &self.tags
        }

        fn status_label(&self) -> &str {
            &self.status
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::new("Rajesh Kumar", &["Masonry", "Painting"], "Available"),
            Row::new("Amit Singh", &["Carpentry", "Electrical"], "Working"),
            Row::new("Suresh Yadav", &["Plumbing", "Welding"], "Available"),
            Row::new("Ravi Sharma", &["Painting", "Cleaning"], "Working"),
        ]
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let rows = rows();
        let hits = filter_records(&rows, &SearchQuery::text("amit"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Amit Singh");
    }

    #[test]
    fn test_query_without_hits_is_empty() {
        let rows = rows();
        assert!(filter_records(&rows, &SearchQuery::text("xyz")).is_empty());
    }

    #[test]
    fn test_query_matches_any_tag() {
        let rows = rows();
        let hits = matching_indices(&rows, &SearchQuery::text("PAINT"));
        assert_eq!(hits, vec![0, 3]);
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let rows = rows();
        assert_eq!(matching_indices(&rows, &SearchQuery::default()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_status_filter_combines_with_query() {
        let rows = rows();
        let query = SearchQuery::new("painting", StatusFilter::parse("working"));
        assert_eq!(matching_indices(&rows, &query), vec![3]);
    }

    #[test]
    fn test_all_status_returns_search_subset() {
        let rows = rows();
        for text in ["", "a", "singh", "welding", "zzz"] {
            let searched = matching_indices(&rows, &SearchQuery::text(text));
            let with_all = matching_indices(&rows, &SearchQuery::new(text, StatusFilter::parse("all")));
            assert_eq!(searched, with_all, "query {text:?}");
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let rows = rows();
        for (text, status) in [("a", "all"), ("paint", "available"), ("", "working"), ("q", "all")] {
            let query = SearchQuery::new(text, StatusFilter::parse(status));
            let once: Vec<Row> = filter_records(&rows, &query).into_iter().cloned().collect();
            let twice: Vec<Row> = filter_records(&once, &query).into_iter().cloned().collect();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_multi_word_status_normalization() {
        assert_eq!(status_key("In Progress"), "inprogress");
        assert_eq!(status_key("Almost-Done"), "almostdone");
        let filter = StatusFilter::parse("almostdone");
        assert!(filter.matches("Almost Done"));
        assert!(!filter.matches("Delayed"));
    }

    #[test]
    fn test_parse_all_sentinel() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("  "), StatusFilter::All);
        assert_eq!(StatusFilter::parse("All"), StatusFilter::All);
    }

    #[test]
    fn test_cycle_wraps_through_options() {
        let options = ["all", "available", "working"];
        let first = StatusFilter::All.cycle(&options);
        assert_eq!(first.key(), "available");
        let second = first.cycle(&options);
        assert_eq!(second.key(), "working");
        assert!(second.cycle(&options).is_all());
    }
}
