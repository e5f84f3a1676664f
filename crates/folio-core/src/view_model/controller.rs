//! Drives a list view model and pushes snapshots to a renderer.

use crate::document::Record;
use crate::domain::Listable;
use crate::error::FolioResult;
use crate::repository::{DocumentReader, Repository};

use super::filter::{Facet, FacetValue};
use super::list::{ListConfig, ListSnapshot, ListViewModel};

type Render<T> = Box<dyn FnMut(&ListSnapshot<T>)>;

/// Owns a [`ListViewModel`] and calls `render` after every mutation that
/// changed what is on screen.
pub struct ListController<T> {
    model: ListViewModel<T>,
    render: Render<T>,
    last: Option<ListSnapshot<T>>,
}

impl<T: Listable + PartialEq> ListController<T> {
    pub fn new(config: ListConfig, render: impl FnMut(&ListSnapshot<T>) + 'static) -> Self {
        Self {
            model: ListViewModel::new(config),
            render: Box::new(render),
            last: None,
        }
    }

    pub fn model(&self) -> &ListViewModel<T> {
        &self.model
    }

    fn publish(&mut self) {
        let snapshot = self.model.snapshot();
        if self.last.as_ref() == Some(&snapshot) {
            return;
        }
        (self.render)(&snapshot);
        self.last = Some(snapshot);
    }

    pub fn load(&mut self, items: Vec<T>) {
        self.model.load(items);
        self.publish();
    }

    pub fn set_filter(&mut self, facet: Facet, value: FacetValue) {
        self.model.set_filter(facet, value);
        self.publish();
    }

    pub fn set_search(&mut self, query: &str) {
        self.model.set_search(query);
        self.publish();
    }

    pub fn clear_filters(&mut self) {
        self.model.clear_filters();
        self.publish();
    }

    pub fn go_to_page(&mut self, n: usize) -> bool {
        let moved = self.model.go_to_page(n);
        if moved {
            self.publish();
        }
        moved
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.model.next_page();
        if moved {
            self.publish();
        }
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.model.prev_page();
        if moved {
            self.publish();
        }
        moved
    }

    /// Go to the page holding `id`. Returns false when it is not in the
    /// filtered set.
    pub fn reveal(&mut self, id: &str) -> bool {
        match self.model.page_of(id) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }
}

impl<T: Listable + Record + PartialEq> ListController<T> {
    /// Fetch the whole collection, newest first, and load it.
    pub async fn reload<S: DocumentReader + ?Sized>(&mut self, repo: &Repository<T, S>) -> FolioResult<usize> {
        let items = repo.list().await?;
        let count = items.len();
        self.load(items);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlogDraft, Blog};
    use crate::repository::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording() -> (Rc<RefCell<Vec<ListSnapshot<Blog>>>>, impl FnMut(&ListSnapshot<Blog>) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |snap: &ListSnapshot<Blog>| sink.borrow_mut().push(snap.clone()))
    }

    fn blogs(n: usize) -> Vec<Blog> {
        (0..n)
            .map(|i| {
                let mut b = Blog::new(format!("b{}", i), format!("Post {}", i));
                b.categories = vec![if i % 2 == 0 { "Even" } else { "Odd" }.to_string()];
                b
            })
            .collect()
    }

    #[test]
    fn test_renders_only_on_change() {
        let (log, render) = recording();
        let mut ctl = ListController::new(ListConfig::default(), render);

        ctl.load(blogs(6));
        assert_eq!(log.borrow().len(), 1);

        assert!(!ctl.go_to_page(5));
        assert_eq!(log.borrow().len(), 1);

        assert!(ctl.next_page());
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(log.borrow()[1].pagination.current_page, 2);

        ctl.set_filter(Facet::Category, FacetValue::All);
        assert_eq!(log.borrow().len(), 3);
        ctl.set_filter(Facet::Category, FacetValue::All);
        assert_eq!(log.borrow().len(), 3);

        ctl.set_filter(Facet::Category, "Odd".into());
        assert_eq!(log.borrow().last().map(|s| s.matched), Some(3));
    }

    #[test]
    fn test_reveal_jumps_to_page() {
        let (log, render) = recording();
        let mut ctl = ListController::new(ListConfig::default(), render);
        ctl.load(blogs(9));
        assert!(ctl.reveal("b8"));
        assert_eq!(ctl.model().current_page(), 3);
        assert!(!ctl.reveal("nope"));
        assert_eq!(log.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_reload_from_store() {
        let store = Rc::new(MemoryStore::new());
        let repo: Repository<Blog, MemoryStore> = Repository::new(store);
        for title in ["One", "Two", "Three"] {
            let draft = BlogDraft {
                title: title.to_string(),
                content: "c".to_string(),
                category: "Web".to_string(),
                tags: String::new(),
                author: "a".to_string(),
                image_url: String::new(),
            };
            repo.create(draft).await.unwrap();
        }

        let (log, render) = recording();
        let mut ctl = ListController::new(ListConfig::default(), render);
        let count = ctl.reload(&repo).await.unwrap();

        assert_eq!(count, 3);
        let snap = log.borrow().last().cloned().unwrap();
        assert_eq!(snap.page_items[0].title, "Three");
        assert_eq!(snap.categories, vec!["Web"]);
    }
}
