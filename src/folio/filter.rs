//! # Visibility Predicate
//!
//! An item is visible when it passes both clauses:
//!
//! ```text
//! (tag == All OR tag ∈ item.tags ∪ {item.group_key})
//!     AND (search == "" OR search is a substring of item.searchable_text)
//! ```
//!
//! Only one tag is active at a time; there is no multi-tag intersection.

use crate::model::Item;
use crate::tags::ALL_TAG;
use serde::Serialize;

/// The active tag selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Parses raw selector input. `"All"`, `"all"` and blank input select
    /// everything; any other value is taken literally, case preserved.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL_TAG || trimmed == "all" {
            TagFilter::All
        } else {
            TagFilter::Tag(trimmed.to_string())
        }
    }

    /// Like [`TagFilter::parse`], except that a value naming one of the
    /// collection's own labels is always that label. A collection tagged
    /// `all` can still be filtered by it.
    pub fn resolve(raw: &str, labels: &[String]) -> Self {
        let trimmed = raw.trim();
        if trimmed != ALL_TAG && labels.iter().any(|label| label == trimmed) {
            TagFilter::Tag(trimmed.to_string())
        } else {
            Self::parse(raw)
        }
    }

    pub fn accepts(&self, item: &Item) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => item.has_label(tag),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TagFilter::All => ALL_TAG,
            TagFilter::Tag(tag) => tag,
        }
    }
}

impl std::fmt::Display for TagFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trims and lower-cases raw search input.
pub fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub active_tag: TagFilter,
    search_term: String,
}

impl FilterState {
    pub fn new(active_tag: TagFilter, raw_search: &str) -> Self {
        Self {
            active_tag,
            search_term: normalize_search(raw_search),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search_term = normalize_search(raw);
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.active_tag.accepts(item)
            && (self.search_term.is_empty() || item.searchable_text().contains(&self.search_term))
    }
}
