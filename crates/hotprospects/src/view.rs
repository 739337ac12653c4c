//! Filtered and sorted projections of the prospect list.
//!
//! Projections are recomputed on every call: filter first, then sort.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::prospect::Prospect;

/// Which prospects a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Everyone.
    #[default]
    All,
    /// Only prospects marked contacted.
    Contacted,
    /// Only prospects not yet contacted.
    Uncontacted,
}

impl Filter {
    /// Whether a prospect passes this filter.
    #[must_use]
    pub fn matches(self, prospect: &Prospect) -> bool {
        match self {
            Self::All => true,
            Self::Contacted => prospect.is_contacted(),
            Self::Uncontacted => !prospect.is_contacted(),
        }
    }

    /// Heading shown above a list using this filter.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::All => "Everyone",
            Self::Contacted => "Contacted people",
            Self::Uncontacted => "Uncontacted people",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Contacted => write!(f, "contacted"),
            Self::Uncontacted => write!(f, "uncontacted"),
        }
    }
}

/// Ordering of a list.
///
/// Config files use the same spellings as `prospects list --sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Insertion order.
    #[default]
    #[serde(rename = "none")]
    None,
    /// By name, A to Z (case-sensitive).
    #[serde(rename = "name-asc", alias = "name_ascending")]
    NameAscending,
    /// By name, Z to A (case-sensitive).
    #[serde(rename = "name-desc", alias = "name_descending")]
    NameDescending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::NameAscending => write!(f, "name-asc"),
            Self::NameDescending => write!(f, "name-desc"),
        }
    }
}

/// Project the prospect list through a filter and a sort order.
///
/// Sorting is stable, so prospects with equal names keep insertion order.
#[must_use]
pub fn project(people: &[Prospect], filter: Filter, sort: SortOrder) -> Vec<&Prospect> {
    let mut shown: Vec<&Prospect> = people.iter().filter(|p| filter.matches(p)).collect();

    match sort {
        SortOrder::None => {}
        SortOrder::NameAscending => shown.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::NameDescending => shown.sort_by(|a, b| b.name.cmp(&a.name)),
    }

    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(view: &[&Prospect]) -> Vec<String> {
        view.iter().map(|p| p.name.clone()).collect()
    }

    fn people(names: &[&str]) -> Vec<Prospect> {
        names
            .iter()
            .map(|n| Prospect::new(*n, format!("{}@example.com", n.to_lowercase())))
            .collect()
    }

    #[test]
    fn test_contacted_filter_on_uncontacted() {
        let list = people(&["Alice"]);
        assert!(project(&list, Filter::Contacted, SortOrder::None).is_empty());
        assert_eq!(
            names(&project(&list, Filter::Uncontacted, SortOrder::None)),
            vec!["Alice"]
        );
    }

    #[test]
    fn test_filter_contacted() {
        let mut list = people(&["Alice", "Bob", "Carol"]);
        list[1] = list[1].toggled();

        assert_eq!(
            names(&project(&list, Filter::Contacted, SortOrder::None)),
            vec!["Bob"]
        );
        assert_eq!(
            names(&project(&list, Filter::Uncontacted, SortOrder::None)),
            vec!["Alice", "Carol"]
        );
        assert_eq!(project(&list, Filter::All, SortOrder::None).len(), 3);
    }

    #[test]
    fn test_sort_descending() {
        let list = people(&["Alice", "Bob"]);
        assert_eq!(
            names(&project(&list, Filter::All, SortOrder::NameDescending)),
            vec!["Bob", "Alice"]
        );
    }

    #[test]
    fn test_sort_ascending() {
        let list = people(&["Carol", "Alice", "Bob"]);
        assert_eq!(
            names(&project(&list, Filter::All, SortOrder::NameAscending)),
            vec!["Alice", "Bob", "Carol"]
        );
    }

    #[test]
    fn test_sort_none_keeps_insertion_order() {
        let list = people(&["Carol", "Alice", "Bob"]);
        assert_eq!(
            names(&project(&list, Filter::All, SortOrder::None)),
            vec!["Carol", "Alice", "Bob"]
        );
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let list = people(&["bob", "Alice", "Bob"]);
        assert_eq!(
            names(&project(&list, Filter::All, SortOrder::NameAscending)),
            vec!["Alice", "Bob", "bob"]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let list = people(&["Sam", "Sam", "Al"]);
        let view = project(&list, Filter::All, SortOrder::NameAscending);
        assert_eq!(view[1].id(), list[0].id());
        assert_eq!(view[2].id(), list[1].id());

        let view = project(&list, Filter::All, SortOrder::NameDescending);
        assert_eq!(view[0].id(), list[0].id());
        assert_eq!(view[1].id(), list[1].id());
    }

    #[test]
    fn test_projection_is_idempotent() {
        let mut list = people(&["Dave", "alice", "Carol", "Bob"]);
        list[2] = list[2].toggled();

        for filter in [Filter::All, Filter::Contacted, Filter::Uncontacted] {
            for sort in [
                SortOrder::None,
                SortOrder::NameAscending,
                SortOrder::NameDescending,
            ] {
                let first = project(&list, filter, sort);
                let second = project(&list, filter, sort);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_filter_titles() {
        assert_eq!(Filter::All.title(), "Everyone");
        assert_eq!(Filter::Contacted.title(), "Contacted people");
        assert_eq!(Filter::Uncontacted.title(), "Uncontacted people");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Filter::default(), Filter::All);
        assert_eq!(SortOrder::default(), SortOrder::None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&SortOrder::NameDescending).unwrap(),
            "\"name-desc\""
        );
        let s: SortOrder = serde_json::from_str("\"name-asc\"").unwrap();
        assert_eq!(s, SortOrder::NameAscending);
        let s: SortOrder = serde_json::from_str("\"name_descending\"").unwrap();
        assert_eq!(s, SortOrder::NameDescending);
        let f: Filter = serde_json::from_str("\"uncontacted\"").unwrap();
        assert_eq!(f, Filter::Uncontacted);
    }
}
