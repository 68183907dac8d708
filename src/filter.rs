//! Case-insensitive substring search over sidebar lists.
//!
//! Filtering is recomputed on every keystroke; there is no index and no
//! debouncing. An empty query matches everything.

use crate::directory::{ChatHistory, Organization};

/// Something that can be matched against a sidebar search query.
pub trait Searchable {
    /// Text fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether any field contains `needle`, which must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for Organization {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str(), self.description.as_str()]
    }
}

impl Searchable for ChatHistory {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.organization_name.as_str(), self.last_message.as_str()]
    }
}

/// Filter `items` down to those matching `query`, preserving order.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}

/// Organizations whose name, category or description contains `query`.
pub fn filter_organizations<'a>(orgs: &'a [Organization], query: &str) -> Vec<&'a Organization> {
    filter(orgs, query)
}

/// Chats whose organization name or last message contains `query`.
pub fn filter_chats<'a>(chats: &'a [ChatHistory], query: &str) -> Vec<&'a ChatHistory> {
    filter(chats, query)
}
