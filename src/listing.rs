//! The one recurring shape in this app: fetch a collection once, keep it in
//! local state, derive a filtered view client-side.
//!
//! `Loading -> {Ready, Failed}`, returning to `Loading` only on an explicit
//! refetch. Changing the category filter never refetches; it only changes
//! which subset of the already-fetched collection is rendered.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum Collection<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Collection<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Collection::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Collection::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Items of a `Ready` collection; empty for every other state, so views
    /// never render stale content alongside a spinner or an error.
    pub fn items(&self) -> &[T] {
        match self {
            Collection::Ready(items) => items,
            _ => &[],
        }
    }

    /// Distinct from the error state: fetched fine, nothing there.
    pub fn is_empty(&self) -> bool {
        matches!(self, Collection::Ready(items) if items.is_empty())
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Optimistic local splice after a successful delete.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        if let Collection::Ready(items) = self {
            items.retain(keep);
        }
    }

    pub fn prepend(&mut self, item: T) {
        if let Collection::Ready(items) = self {
            items.insert(0, item);
        }
    }

    /// In-place edit of the first matching item (e.g. flipping a flag after
    /// a successful update).
    pub fn update_where(&mut self, mut matches: impl FnMut(&T) -> bool, apply: impl FnOnce(&mut T)) {
        if let Collection::Ready(items) = self {
            if let Some(item) = items.iter_mut().find(|item| matches(item)) {
                apply(item);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label == "All" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(name) => name,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => name == category,
        }
    }
}

/// Client-side predicate filter, preserving the original relative order.
pub fn filtered<T: Clone>(
    items: &[T],
    filter: &CategoryFilter,
    category_of: impl Fn(&T) -> &str,
) -> Vec<T> {
    items
        .iter()
        .filter(|item| filter.matches(category_of(item)))
        .cloned()
        .collect()
}

/// Drives one fetch into a collection signal. `try_set` guards against the
/// view having been unmounted by the time the response lands.
pub fn load<T, Fut>(state: WriteSignal<Collection<T>>, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    state.set(Collection::Loading);
    spawn_local(async move {
        let next = match fetch.await {
            Ok(items) => Collection::Ready(items),
            Err(err) => Collection::Failed(err.to_string()),
        };
        let _ = state.try_set(next);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
        category: &'static str,
    }

    fn twelve_gallery_items() -> Vec<Item> {
        let categories = ["Electrical", "Solar", "Security", "Smart Home"];
        (0..12u32)
            .map(|i| Item {
                id: i,
                category: categories[(i % 4) as usize],
            })
            .collect()
    }

    #[test]
    fn all_filter_returns_the_full_collection() {
        let items = twelve_gallery_items();
        let out = filtered(&items, &CategoryFilter::All, |i| i.category);
        assert_eq!(out, items);
    }

    #[test]
    fn category_filter_yields_exactly_the_matching_subset_in_order() {
        let items = twelve_gallery_items();
        let out = filtered(&items, &CategoryFilter::from_label("Solar"), |i| i.category);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|i| i.category == "Solar"));
        let ids: Vec<u32> = out.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 5, 9]);
    }

    #[test]
    fn selecting_all_after_a_category_restores_everything() {
        let items = twelve_gallery_items();
        let narrowed = filtered(&items, &CategoryFilter::from_label("Security"), |i| i.category);
        assert_eq!(narrowed.len(), 3);
        let restored = filtered(&items, &CategoryFilter::from_label("All"), |i| i.category);
        assert_eq!(restored, items);
    }

    #[test]
    fn empty_ready_is_not_an_error() {
        let collection: Collection<Item> = Collection::Ready(vec![]);
        assert!(collection.is_empty());
        assert!(collection.error().is_none());
        assert!(!collection.is_loading());
    }

    #[test]
    fn failed_discards_any_previous_items() {
        let collection: Collection<Item> = Collection::Failed("Network error: offline".into());
        assert!(collection.items().is_empty());
        assert!(!collection.is_empty());
        assert_eq!(collection.error(), Some("Network error: offline"));
    }

    #[test]
    fn retain_splices_exactly_the_deleted_item() {
        let mut collection = Collection::Ready(twelve_gallery_items());
        collection.retain(|i| i.id != 5);
        assert_eq!(collection.len(), 11);
        let ids: Vec<u32> = collection.items().iter().map(|i| i.id).collect();
        assert!(!ids.contains(&5));
        // Remaining items keep their original relative order.
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn update_where_edits_only_the_first_match() {
        let mut collection = Collection::Ready(twelve_gallery_items());
        collection.update_where(|i| i.id == 2, |i| i.category = "Solar");
        assert_eq!(collection.items()[2].category, "Solar");
        assert_eq!(collection.items()[3].category, "Smart Home");
    }
}
