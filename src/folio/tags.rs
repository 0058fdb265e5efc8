//! Tag universe derivation.
//!
//! The selector always lists every label present anywhere in the collection,
//! so narrowing the view by one tag never hides the others.

use crate::model::Item;

/// Sentinel shown first in every tag selector.
pub const ALL_TAG: &str = "All";

/// `All` followed by each label in first-seen collection order.
pub fn available_tags(items: &[Item]) -> Vec<String> {
    let mut tags = vec![ALL_TAG.to_string()];
    for label in items.iter().flat_map(|item| item.labels()) {
        if !tags.iter().any(|t| t == label) {
            tags.push(label.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, tags: &[&str]) -> Item {
        Item::project(id, id, tags.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn empty_collection_has_only_all() {
        assert_eq!(available_tags(&[]), vec!["All".to_string()]);
    }

    #[test]
    fn first_seen_order_without_duplicates() {
        let items = vec![
            project("a", &["rust", "cli"]),
            project("b", &["web", "rust"]),
            project("c", &["cli", "data"]),
        ];
        assert_eq!(
            available_tags(&items),
            vec!["All", "rust", "cli", "web", "data"]
        );
    }

    #[test]
    fn timeline_group_keys_are_included() {
        let items = vec![
            Item::timeline("a", "Job", "work", "2021"),
            Item::timeline("b", "Degree", "education", "2018"),
            Item::timeline("c", "Job 2", "work", "2019"),
        ];
        assert_eq!(available_tags(&items), vec!["All", "work", "education"]);
    }
}
