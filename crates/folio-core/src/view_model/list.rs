//! Paginated, filterable view over a loaded list.
//!
//! Holds the full item set plus the indices that pass the current filter.
//! Every filter change re-scans the full set and returns to page 1, so the
//! current page is always in range.

use crate::domain::{same_label, Listable};

use super::filter::{Facet, FacetValue, Filter};
use super::pagination::{page_of_index, page_range, total_pages, PaginationDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    pub page_size: usize,
    pub recent_count: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: 4,
            recent_count: 5,
        }
    }
}

/// Owned view state handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<T> {
    pub page_items: Vec<T>,
    pub recent_items: Vec<T>,
    pub pagination: PaginationDescriptor,
    pub filter: Filter,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    /// Items loaded
    pub total: usize,
    /// Items passing the filter
    pub matched: usize,
}

impl<T> Default for ListSnapshot<T> {
    fn default() -> Self {
        Self {
            page_items: Vec::new(),
            recent_items: Vec::new(),
            pagination: PaginationDescriptor::default(),
            filter: Filter::default(),
            categories: Vec::new(),
            tags: Vec::new(),
            total: 0,
            matched: 0,
        }
    }
}

impl<T> ListSnapshot<T> {
    pub fn options(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Category => &self.categories,
            Facet::Tag => &self.tags,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListViewModel<T> {
    config: ListConfig,
    items: Vec<T>,
    filtered: Vec<usize>,
    filter: Filter,
    current_page: usize,
}

impl<T: Listable> Default for ListViewModel<T> {
    fn default() -> Self {
        Self::new(ListConfig::default())
    }
}

impl<T: Listable> ListViewModel<T> {
    pub fn new(config: ListConfig) -> Self {
        Self {
            config: ListConfig {
                page_size: config.page_size.max(1),
                recent_count: config.recent_count,
            },
            items: Vec::new(),
            filtered: Vec::new(),
            filter: Filter::default(),
            current_page: 1,
        }
    }

    /// Replace the item set, newest first, with all filters cleared.
    /// Items without a timestamp keep their relative order after the dated ones.
    pub fn load(&mut self, mut items: Vec<T>) {
        items.sort_by(|a, b| match (a.created_at(), b.created_at()) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        self.items = items;
        self.filter = Filter::default();
        self.refilter();
    }

    pub fn set_filter(&mut self, facet: Facet, value: FacetValue) {
        self.filter.set(facet, value);
        self.refilter();
    }

    pub fn set_search(&mut self, query: &str) {
        self.filter.search = query.trim().to_string();
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.filter = Filter::default();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter.matches(*item))
            .map(|(i, _)| i)
            .collect();
        self.current_page = 1;
    }

    /// Move to page `n`. Returns false, leaving the page unchanged, when `n`
    /// is outside `1..=total_pages`.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n < 1 || n > self.total_pages() {
            return false;
        }
        self.current_page = n;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.current_page.checked_sub(1) {
            Some(n) => self.go_to_page(n),
            None => false,
        }
    }

    /// Page holding the item with `id` in the filtered set.
    pub fn page_of(&self, id: &str) -> Option<usize> {
        self.filtered
            .iter()
            .position(|&i| self.items[i].id() == id)
            .map(|pos| page_of_index(pos, self.config.page_size))
    }

    /// Distinct values of `facet` across the unfiltered set, in first-seen
    /// order and spelling.
    pub fn derived_options(&self, facet: Facet) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();
        for value in self.items.iter().flat_map(|item| facet.values(item)) {
            let value = value.trim();
            if value.is_empty() || options.iter().any(|o| same_label(o, value)) {
                continue;
            }
            options.push(value.to_string());
        }
        options
    }

    pub fn current_page_items(&self) -> Vec<&T> {
        let range = page_range(self.current_page, self.config.page_size, self.filtered.len());
        self.filtered[range].iter().map(|&i| &self.items[i]).collect()
    }

    /// First `recent_count` items of the filtered set.
    pub fn recent_items(&self) -> Vec<&T> {
        self.filtered_items().take(self.config.recent_count).collect()
    }

    pub fn pagination_descriptor(&self) -> PaginationDescriptor {
        PaginationDescriptor::new(self.current_page, self.total_pages())
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.config.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filtered_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.filtered.iter().map(|&i| &self.items[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn snapshot(&self) -> ListSnapshot<T> {
        ListSnapshot {
            page_items: self.current_page_items().into_iter().cloned().collect(),
            recent_items: self.recent_items().into_iter().cloned().collect(),
            pagination: self.pagination_descriptor(),
            filter: self.filter.clone(),
            categories: self.derived_options(Facet::Category),
            tags: self.derived_options(Facet::Tag),
            total: self.items.len(),
            matched: self.filtered.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entity;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        title: String,
        categories: Vec<String>,
        tags: Vec<String>,
        created_at: Option<DateTime<Utc>>,
    }

    impl Entity for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    impl Listable for Item {
        fn title(&self) -> &str {
            &self.title
        }
        fn categories(&self) -> &[String] {
            &self.categories
        }
        fn tags(&self) -> &[String] {
            &self.tags
        }
        fn created_at(&self) -> Option<DateTime<Utc>> {
            self.created_at
        }
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// `n` items where item 1 is the newest.
    fn items(n: usize) -> Vec<Item> {
        (1..=n)
            .map(|i| Item {
                id: format!("i{}", i),
                title: format!("Item {}", i),
                categories: vec![if i % 2 == 0 { "B" } else { "A" }.to_string()],
                tags: if i % 3 == 0 { vec!["x".to_string()] } else { vec![] },
                created_at: Some(base() - Duration::hours(i as i64)),
            })
            .collect()
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    fn model(n: usize) -> ListViewModel<Item> {
        let mut vm = ListViewModel::default();
        vm.load(items(n));
        vm
    }

    #[test]
    fn test_ten_items_make_three_pages() {
        let mut vm = model(10);
        assert_eq!(vm.total_pages(), 3);
        assert_eq!(ids(&vm.current_page_items()), vec!["i1", "i2", "i3", "i4"]);
        assert!(vm.go_to_page(3));
        assert_eq!(ids(&vm.current_page_items()), vec!["i9", "i10"]);
        let desc = vm.pagination_descriptor();
        assert_eq!(desc, PaginationDescriptor::new(3, 3));
        assert!(desc.has_prev && !desc.has_next);
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let vm = model(0);
        assert_eq!(vm.total_pages(), 1);
        assert!(vm.current_page_items().is_empty());
        assert!(vm.recent_items().is_empty());
        let desc = vm.pagination_descriptor();
        assert!(!desc.has_prev && !desc.has_next);
    }

    #[test]
    fn test_out_of_range_page_is_ignored() {
        let mut vm = model(10);
        assert!(vm.go_to_page(2));
        assert!(!vm.go_to_page(0));
        assert!(!vm.go_to_page(4));
        assert_eq!(vm.current_page(), 2);
        assert!(vm.next_page());
        assert!(!vm.next_page());
        assert_eq!(vm.current_page(), 3);
    }

    #[test]
    fn test_prev_page_stops_at_first() {
        let mut vm = model(10);
        assert!(!vm.prev_page());
        assert_eq!(vm.current_page(), 1);

        assert!(vm.go_to_page(3));
        assert!(vm.prev_page());
        assert_eq!(vm.current_page(), 2);
        assert_eq!(ids(&vm.current_page_items()), vec!["i5", "i6", "i7", "i8"]);
        assert!(vm.prev_page());
        assert!(!vm.prev_page());
        assert!(!vm.pagination_descriptor().has_prev);
    }

    #[test]
    fn test_load_sorts_newest_first_undated_last() {
        let mut list = items(3);
        list[0].created_at = None;
        list.reverse();
        let mut vm = ListViewModel::default();
        vm.load(list);
        let order: Vec<&str> = vm.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["i2", "i3", "i1"]);
    }

    #[test]
    fn test_category_then_tag_is_and() {
        let mut vm = ListViewModel::default();
        let mut list = items(3);
        for item in &mut list {
            item.categories = vec!["A".into()];
        }
        list[0].tags = vec!["x".into()];
        list[2].tags = vec!["x".into()];
        list.extend(items(6).into_iter().skip(3).map(|mut i| {
            i.categories = vec!["B".into()];
            i.tags = vec!["x".into()];
            i
        }));
        vm.load(list);

        vm.set_filter(Facet::Category, "A".into());
        assert_eq!(vm.filtered_len(), 3);
        vm.set_filter(Facet::Tag, "x".into());
        assert_eq!(vm.filtered_len(), 2);
    }

    #[test]
    fn test_all_restores_full_set() {
        let mut vm = model(9);
        let before: Vec<String> = vm.filtered_items().map(|i| i.id.clone()).collect();
        vm.set_filter(Facet::Category, "B".into());
        assert_eq!(vm.filtered_len(), 4);
        vm.set_filter(Facet::Category, FacetValue::parse("All"));
        let after: Vec<String> = vm.filtered_items().map(|i| i.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut vm = model(10);
        vm.go_to_page(3);
        vm.set_filter(Facet::Tag, "x".into());
        assert_eq!(vm.current_page(), 1);
        vm.go_to_page(1);
        vm.set_search("item");
        assert_eq!(vm.current_page(), 1);
    }

    #[test]
    fn test_derived_options_first_seen() {
        let mut list = items(3);
        list[0].categories = vec!["Web".into()];
        list[1].categories = vec!["AI".into(), "web".into()];
        list[2].categories = vec![" ".into(), "Ai".into()];
        let mut vm = ListViewModel::default();
        vm.load(list);
        vm.set_filter(Facet::Category, "AI".into());
        assert_eq!(vm.derived_options(Facet::Category), vec!["Web", "AI"]);
    }

    #[test]
    fn test_page_of_recent_item() {
        let mut vm = model(10);
        assert_eq!(vm.page_of("i1"), Some(1));
        assert_eq!(vm.page_of("i6"), Some(2));
        assert_eq!(vm.page_of("i10"), Some(3));
        assert_eq!(vm.page_of("missing"), None);
        vm.set_filter(Facet::Category, "B".into());
        assert_eq!(vm.page_of("i10"), Some(2));
        assert_eq!(vm.page_of("i1"), None);
    }

    #[test]
    fn test_snapshot() {
        let mut vm = model(6);
        vm.go_to_page(2);
        let snap = vm.snapshot();
        assert_eq!(snap.page_items.len(), 2);
        assert_eq!(snap.recent_items.len(), 5);
        assert_eq!(snap.total, 6);
        assert_eq!(snap.matched, 6);
        assert_eq!(snap.options(Facet::Category), ["A", "B"]);
        assert_eq!(snap.options(Facet::Tag), ["x"]);
        assert_eq!(snap.pagination.current_page, 2);
    }

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec((0..3usize, 0..3usize, prop::option::of(0..1000i64)), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (cat, tag, hours))| Item {
                    id: format!("i{}", i),
                    title: format!("Item {}", i),
                    categories: vec![["A", "B", "C"][cat].to_string()],
                    tags: vec![["x", "y", "z"][tag].to_string()],
                    created_at: hours.map(|h| base() + Duration::hours(h)),
                })
                .collect()
        })
    }

    fn arb_facet_value() -> impl Strategy<Value = FacetValue> {
        prop_oneof![
            Just(FacetValue::All),
            "[ABCxyz]".prop_map(FacetValue::Only),
        ]
    }

    proptest! {
        #[test]
        fn prop_pages_cover_filtered(list in arb_items(), size in 1..7usize, cat in arb_facet_value(), tag in arb_facet_value()) {
            let mut vm = ListViewModel::new(ListConfig { page_size: size, recent_count: 5 });
            vm.load(list);
            vm.set_filter(Facet::Category, cat);
            vm.set_filter(Facet::Tag, tag);

            let mut seen = Vec::new();
            for page in 1..=vm.total_pages() {
                prop_assert!(vm.go_to_page(page));
                seen.extend(vm.current_page_items().into_iter().map(|i| i.id.clone()));
            }
            let expected: Vec<String> = vm.filtered_items().map(|i| i.id.clone()).collect();
            prop_assert_eq!(seen, expected);
        }

        #[test]
        fn prop_invalid_page_never_set(list in arb_items(), n in 0..20usize) {
            let mut vm = ListViewModel::default();
            vm.load(list);
            let before = vm.current_page();
            let moved = vm.go_to_page(n);
            if n < 1 || n > vm.total_pages() {
                prop_assert!(!moved);
                prop_assert_eq!(vm.current_page(), before);
            } else {
                prop_assert_eq!(vm.current_page(), n);
            }
        }

        #[test]
        fn prop_filter_resets_page(list in arb_items(), page in 1..10usize, value in arb_facet_value()) {
            let mut vm = ListViewModel::default();
            vm.load(list);
            vm.go_to_page(page);
            vm.set_filter(Facet::Tag, value);
            prop_assert_eq!(vm.current_page(), 1);
        }

        #[test]
        fn prop_recent_is_prefix(list in arb_items(), value in arb_facet_value()) {
            let mut vm = ListViewModel::default();
            vm.load(list);
            vm.set_filter(Facet::Category, value);
            let recent = ids(&vm.recent_items());
            let filtered: Vec<String> = vm.filtered_items().map(|i| i.id.clone()).collect();
            prop_assert_eq!(recent.len(), filtered.len().min(5));
            prop_assert_eq!(&filtered[..recent.len()], &recent[..]);
        }
    }
}
