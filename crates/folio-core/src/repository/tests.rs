//! Repository Integration Tests
//!
//! Typed repositories against the in-memory store.

#[cfg(test)]
mod tests {
    use crate::document::{Collection, Document, FieldValue, Fields};
    use crate::domain::{ActiveUser, Blog, BlogDraft, BlogPatch, Message, MessageDraft, Project, Visitor};
    use crate::error::FolioError;
    use crate::repository::{MemoryStore, Repository};
    use chrono::Duration;
    use std::rc::Rc;

    fn setup_store() -> Rc<MemoryStore> {
        Rc::new(MemoryStore::new())
    }

    fn draft(title: &str) -> BlogDraft {
        BlogDraft {
            title: title.to_string(),
            content: "Body".to_string(),
            category: "Web".to_string(),
            tags: "rust, wasm".to_string(),
            author: "Ada".to_string(),
            image_url: "https://img/x.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_blog() {
        let repo: Repository<Blog, MemoryStore> = Repository::new(setup_store());

        let id = repo.create(draft("Hello")).await.expect("Failed to create");
        let blog = repo.find_by_id(&id).await.expect("Find failed");

        assert_eq!(blog.title, "Hello");
        assert_eq!(blog.categories, vec!["Web"]);
        assert_eq!(blog.tags, vec!["rust", "wasm"]);
        assert!(!blog.published);
        assert!(blog.created_at.is_some());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo: Repository<Blog, MemoryStore> = Repository::new(setup_store());

        repo.create(draft("First")).await.unwrap();
        repo.create(draft("Second")).await.unwrap();
        repo.create(draft("Third")).await.unwrap();

        let titles: Vec<String> = repo.list().await.unwrap().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);

        let recent = repo.recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].title, "Third");
    }

    #[tokio::test]
    async fn test_list_skips_malformed_documents() {
        let store = setup_store();
        let mut fields = Fields::new();
        fields.insert("content".into(), FieldValue::string("no title"));
        fields.insert("createdAt".into(), FieldValue::Timestamp(store.now()));
        store.insert(Collection::Blogs, Document::new("broken", fields));

        let repo: Repository<Blog, MemoryStore> = Repository::new(store.clone());
        repo.create(draft("Fine")).await.unwrap();

        let blogs = repo.list().await.unwrap();
        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0].title, "Fine");
        assert_eq!(store.len(Collection::Blogs), 2);
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let repo: Repository<Project, MemoryStore> = Repository::new(setup_store());
        let err = repo.find_by_id("nope").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.placeholder("project"), "Project not found.");
    }

    #[tokio::test]
    async fn test_update_and_publish() {
        let repo: Repository<Blog, MemoryStore> = Repository::new(setup_store());
        let id = repo.create(draft("Draft")).await.unwrap();

        let mut patch = BlogPatch::from_blog(&repo.find_by_id(&id).await.unwrap());
        patch.title = "Edited".to_string();
        repo.update(&id, patch).await.expect("Update failed");
        repo.set_published(&id, true).await.expect("Publish failed");

        let blog = repo.find_by_id(&id).await.unwrap();
        assert_eq!(blog.title, "Edited");
        assert_eq!(blog.content, "Body");
        assert!(blog.published);
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let repo: Repository<Blog, MemoryStore> = Repository::new(setup_store());
        let err = repo.set_published("ghost", true).await.unwrap_err();
        assert!(matches!(err, FolioError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_message() {
        let repo: Repository<Message, MemoryStore> = Repository::new(setup_store());
        let id = repo
            .create(MessageDraft {
                name: " Ada ".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hi".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(repo.find_by_id(&id).await.unwrap().name, "Ada");

        repo.delete(&id).await.expect("Delete failed");
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_touch_refreshes_active_user() {
        let store = setup_store();
        let repo: Repository<ActiveUser, MemoryStore> = Repository::new(store.clone());

        repo.touch("visitor-a").await.unwrap();
        let first = repo.find_by_id("visitor-a").await.unwrap().last_active.unwrap();

        store.set_now(store.now() + Duration::minutes(10));
        repo.touch("visitor-b").await.unwrap();
        repo.touch("visitor-a").await.unwrap();

        let again = repo.find_by_id("visitor-a").await.unwrap().last_active.unwrap();
        assert!(again > first);
        assert_eq!(store.len(Collection::ActiveUsers), 2);
    }

    #[tokio::test]
    async fn test_since_filters_by_order_field() {
        let store = setup_store();
        let repo: Repository<ActiveUser, MemoryStore> = Repository::new(store.clone());

        repo.touch("old").await.unwrap();
        store.set_now(store.now() + Duration::minutes(30));
        repo.touch("fresh").await.unwrap();

        let cutoff = store.now() - Duration::minutes(5);
        let active = repo.since(cutoff).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "fresh");
    }

    #[tokio::test]
    async fn test_visitors_stamped_on_create() {
        let repo: Repository<Visitor, MemoryStore> = Repository::new(setup_store());
        repo.create(Fields::new()).await.unwrap();
        let visitors = repo.list().await.unwrap();
        assert_eq!(visitors.len(), 1);
        assert!(visitors[0].timestamp.is_some());
    }

    #[tokio::test]
    async fn test_all_keeps_unstamped_visitors() {
        let store = setup_store();
        let repo: Repository<Visitor, MemoryStore> = Repository::new(store.clone());
        repo.touch("stamped").await.unwrap();
        store.insert(Collection::Visitors, Document::new("legacy", Fields::new()));

        assert_eq!(repo.list().await.unwrap().len(), 1);

        let visitors = repo.all().await.unwrap();
        assert_eq!(visitors.len(), 2);
        let legacy = visitors.iter().find(|v| v.id == "legacy").unwrap();
        assert!(legacy.timestamp.is_none());
    }

    #[tokio::test]
    async fn test_offline_store_reports_service_error() {
        let store = setup_store();
        store.set_offline(true);
        let repo: Repository<Blog, MemoryStore> = Repository::new(store);
        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, FolioError::Service(_)));
        assert_eq!(err.placeholder("blogs"), "Error loading blogs.");
    }
}
