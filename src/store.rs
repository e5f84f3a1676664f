//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every admin
//! mutation is followed by a full reload of the affected list; the remove and
//! publish helpers update the store first so the panel reacts immediately.

use std::future::Future;

use folio_core::domain::{active_since, count_active, ActiveUser, Blog, Message, Project, Visitor};
use folio_core::FolioResult;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::context::AppContext;
use crate::models::Notice;

/// Admin dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// All messages, newest first
    pub messages: Vec<Message>,
    /// All posts including drafts
    pub blogs: Vec<Blog>,
    /// All projects including drafts
    pub projects: Vec<Project>,
    /// Every visitor record, for the totals and chart
    pub visitors: Vec<Visitor>,
    /// Admins active within the last few minutes
    pub active_users: usize,
    /// Placeholder per panel when its load failed
    pub messages_error: Option<String>,
    pub blogs_error: Option<String>,
    pub projects_error: Option<String>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_remove_message(store: &DashboardStore, id: &str) {
    store.messages().write().retain(|m| m.id != id);
}

pub fn store_remove_blog(store: &DashboardStore, id: &str) {
    store.blogs().write().retain(|b| b.id != id);
}

pub fn store_remove_project(store: &DashboardStore, id: &str) {
    store.projects().write().retain(|p| p.id != id);
}

pub fn store_set_blog_published(store: &DashboardStore, id: &str, published: bool) {
    if let Some(blog) = store.blogs().write().iter_mut().find(|b| b.id == id) {
        blog.published = published;
    }
}

pub fn store_set_project_published(store: &DashboardStore, id: &str, published: bool) {
    if let Some(project) = store.projects().write().iter_mut().find(|p| p.id == id) {
        project.published = published;
    }
}

// ========================
// Loaders
// ========================

pub async fn reload_messages(ctx: AppContext, store: DashboardStore) {
    match ctx.repo::<Message>().list().await {
        Ok(messages) => {
            *store.messages().write() = messages;
            *store.messages_error().write() = None;
        }
        Err(e) => {
            log::error!("loading messages: {}", e);
            *store.messages_error().write() = Some(e.placeholder("messages"));
        }
    }
}

pub async fn reload_blogs(ctx: AppContext, store: DashboardStore) {
    match ctx.repo::<Blog>().list().await {
        Ok(blogs) => {
            *store.blogs().write() = blogs;
            *store.blogs_error().write() = None;
        }
        Err(e) => {
            log::error!("loading blogs: {}", e);
            *store.blogs_error().write() = Some(e.placeholder("blogs"));
        }
    }
}

pub async fn reload_projects(ctx: AppContext, store: DashboardStore) {
    match ctx.repo::<Project>().list().await {
        Ok(projects) => {
            *store.projects().write() = projects;
            *store.projects_error().write() = None;
        }
        Err(e) => {
            log::error!("loading projects: {}", e);
            *store.projects_error().write() = Some(e.placeholder("projects"));
        }
    }
}

/// Visitors and active admins for the totals and the visitor chart.
/// Visitors are read unordered so undated ones still count.
pub async fn reload_analytics(ctx: AppContext, store: DashboardStore) {
    match ctx.repo::<Visitor>().all().await {
        Ok(visitors) => *store.visitors().write() = visitors,
        Err(e) => log::error!("loading visitors: {}", e),
    }

    let now = chrono::Utc::now();
    match ctx.repo::<ActiveUser>().since(active_since(now)).await {
        Ok(users) => *store.active_users().write() = count_active(&users, now),
        Err(e) => log::error!("loading active users: {}", e),
    }
}

// ========================
// Mutations
// ========================

/// Run an admin mutation, report its outcome, then reload the affected list
/// whether or not it succeeded.
pub fn spawn_mutation(
    set_notice: WriteSignal<Option<Notice>>,
    success: &'static str,
    action: impl Future<Output = FolioResult<()>> + 'static,
    reload: impl Future<Output = ()> + 'static,
) {
    spawn_local(async move {
        let result = action.await;
        set_notice.set(Some(Notice::from_result(&result, success)));
        reload.await;
    });
}
