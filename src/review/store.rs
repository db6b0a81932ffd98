//! Review collection and the app-name filter over it.
//!
//! `ReviewStore` is an immutable snapshot. Every change goes through
//! [`ReviewStore::reduce`], which rebuilds the displayed rows and the list of
//! app names from scratch, so derived state can never lag behind the
//! collection or the selection.

use std::collections::HashSet;

use super::model::Review;

/// Current app-name filter. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AppFilter {
    #[default]
    All,
    App(String),
}

impl AppFilter {
    pub fn matches(&self, review: &Review) -> bool {
        match self {
            AppFilter::All => true,
            AppFilter::App(name) => review.app_name == *name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AppFilter::All => "All Apps",
            AppFilter::App(name) if name.is_empty() => "(unknown app)",
            AppFilter::App(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    FetchSucceeded(Vec<Review>),
    FetchFailed { error: String },
    FilterChanged(AppFilter),
}

#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    collection: Vec<Review>,
    /// Indices into `collection`, in collection order.
    displayed: Vec<usize>,
    app_names: Vec<String>,
    filter: AppFilter,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(self, event: StoreEvent) -> Self {
        match event {
            StoreEvent::FetchSucceeded(rows) => Self::derive(rows, self.filter),
            // A failed fetch keeps whatever was there before.
            StoreEvent::FetchFailed { .. } => self,
            StoreEvent::FilterChanged(filter) => Self::derive(self.collection, filter),
        }
    }

    fn derive(collection: Vec<Review>, filter: AppFilter) -> Self {
        let displayed = collection
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.matches(r))
            .map(|(i, _)| i)
            .collect();
        let app_names = distinct_app_names(&collection);
        Self {
            collection,
            displayed,
            app_names,
            filter,
        }
    }

    pub fn collection(&self) -> &[Review] {
        &self.collection
    }

    pub fn displayed(&self) -> impl ExactSizeIterator<Item = &Review> + '_ {
        self.displayed.iter().map(move |&i| &self.collection[i])
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    /// Displayed rows in `range`, clamped to the subset length.
    pub fn displayed_range(&self, start: usize, end: usize) -> impl Iterator<Item = &Review> + '_ {
        self.displayed().skip(start).take(end.saturating_sub(start))
    }

    pub fn app_names(&self) -> &[String] {
        &self.app_names
    }

    pub fn filter(&self) -> &AppFilter {
        &self.filter
    }
}

/// App names in order of first appearance, each once.
pub fn distinct_app_names(reviews: &[Review]) -> Vec<String> {
    let mut seen = HashSet::new();
    reviews
        .iter()
        .filter(|r| seen.insert(r.app_name.as_str()))
        .map(|r| r.app_name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: u64, app: &str, rating: u8) -> Review {
        Review {
            id,
            app_name: app.into(),
            rating,
            title: format!("t{}", id),
            content: format!("c{}", id),
            author: format!("a{}", id),
        }
    }

    fn ids(store: &ReviewStore) -> Vec<u64> {
        store.displayed().map(|r| r.id).collect()
    }

    fn sample() -> Vec<Review> {
        vec![
            review(1, "Reader", 5),
            review(2, "Speller", 2),
            review(3, "Reader", 4),
            review(4, "Notes", 1),
            review(5, "Speller", 3),
        ]
    }

    fn loaded() -> ReviewStore {
        ReviewStore::new().reduce(StoreEvent::FetchSucceeded(sample()))
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ReviewStore::new();
        assert!(store.collection().is_empty());
        assert_eq!(store.displayed_len(), 0);
        assert!(store.app_names().is_empty());
        assert_eq!(*store.filter(), AppFilter::All);
    }

    #[test]
    fn test_no_filter_shows_whole_collection_in_order() {
        let store = loaded();
        assert_eq!(ids(&store), vec![1, 2, 3, 4, 5]);
        assert_eq!(store.displayed().cloned().collect::<Vec<_>>(), sample());
    }

    #[test]
    fn test_filter_keeps_matching_rows_in_order() {
        let store = loaded().reduce(StoreEvent::FilterChanged(AppFilter::App("Speller".into())));
        assert_eq!(ids(&store), vec![2, 5]);
        assert!(store.displayed().all(|r| r.app_name == "Speller"));
        assert_eq!(store.collection().len(), 5);
    }

    #[test]
    fn test_distinct_app_names_first_occurrence_order() {
        let store = loaded();
        assert_eq!(store.app_names(), ["Reader", "Speller", "Notes"]);
    }

    #[test]
    fn test_sentinel_restores_full_collection() {
        let store = loaded()
            .reduce(StoreEvent::FilterChanged(AppFilter::App("Notes".into())))
            .reduce(StoreEvent::FilterChanged(AppFilter::All));
        assert_eq!(ids(&store), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reselecting_same_app_is_idempotent() {
        let first = loaded().reduce(StoreEvent::FilterChanged(AppFilter::App("Reader".into())));
        let first_ids = ids(&first);
        let second = first.reduce(StoreEvent::FilterChanged(AppFilter::App("Reader".into())));
        assert_eq!(first_ids, ids(&second));
        assert_eq!(ids(&second), vec![1, 3]);
    }

    #[test]
    fn test_unknown_app_yields_empty_subset() {
        let store = loaded().reduce(StoreEvent::FilterChanged(AppFilter::App("Missing".into())));
        assert_eq!(store.displayed_len(), 0);
        assert_eq!(store.app_names().len(), 3);
    }

    #[test]
    fn test_two_row_example() {
        let rows = vec![review(1, "A", 5), review(2, "B", 1)];
        let store = ReviewStore::new().reduce(StoreEvent::FetchSucceeded(rows.clone()));

        let store = store.reduce(StoreEvent::FilterChanged(AppFilter::App("A".into())));
        assert_eq!(store.displayed().cloned().collect::<Vec<_>>(), vec![rows[0].clone()]);

        let store = store.reduce(StoreEvent::FilterChanged(AppFilter::All));
        assert_eq!(store.displayed().cloned().collect::<Vec<_>>(), rows);
    }

    #[test]
    fn test_fetch_failure_leaves_store_empty() {
        let store = ReviewStore::new().reduce(StoreEvent::FetchFailed {
            error: "connection refused".into(),
        });
        assert!(store.collection().is_empty());
        assert_eq!(store.displayed_len(), 0);
    }

    #[test]
    fn test_fetch_failure_keeps_previous_rows() {
        let store = loaded().reduce(StoreEvent::FetchFailed {
            error: "timeout".into(),
        });
        assert_eq!(ids(&store), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fetch_replaces_collection_and_reapplies_filter() {
        let store = loaded()
            .reduce(StoreEvent::FilterChanged(AppFilter::App("Reader".into())))
            .reduce(StoreEvent::FetchSucceeded(vec![
                review(10, "Notes", 2),
                review(11, "Reader", 5),
            ]));
        assert_eq!(store.collection().len(), 2);
        assert_eq!(ids(&store), vec![11]);
        assert_eq!(store.app_names(), ["Notes", "Reader"]);
    }

    #[test]
    fn test_displayed_range_is_clamped() {
        let store = loaded();
        let page: Vec<u64> = store.displayed_range(3, 10).map(|r| r.id).collect();
        assert_eq!(page, vec![4, 5]);
        assert_eq!(store.displayed_range(8, 12).count(), 0);
    }

    #[test]
    fn test_filter_label() {
        assert_eq!(AppFilter::All.label(), "All Apps");
        assert_eq!(AppFilter::App("Reader".into()).label(), "Reader");
        assert_eq!(AppFilter::App(String::new()).label(), "(unknown app)");
    }

    #[test]
    fn test_rows_without_app_name_are_kept_and_filterable() {
        let store = ReviewStore::new().reduce(StoreEvent::FetchSucceeded(vec![
            review(1, "Reader", 5),
            review(2, "", 3),
            review(3, "Reader", 1),
        ]));
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.app_names(), ["Reader", ""]);

        let store = store.reduce(StoreEvent::FilterChanged(AppFilter::App(String::new())));
        assert_eq!(ids(&store), vec![2]);
    }
}
