//! Folio Frontend App
//!
//! Router, shared chrome and the app context.

use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::browser;
use crate::components::{NavBar, SiteFooter};
use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::pages::{BlogListPage, BlogPostPage, DashboardPage, HomePage, LoginPage, ProjectsPage};

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a href="/" class="btn">"Back to Home"</a>
        </section>
    }
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    browser::apply_theme(browser::saved_theme());

    // Provide context to all children
    provide_context(AppContext::new(config, signal(browser::load_session())));

    view! {
        <Router>
            <NavBar />
            <main class="page">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/blog") view=BlogListPage />
                    <Route path=path!("/blog/post") view=BlogPostPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/admin") view=LoginPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                </Routes>
            </main>
            <SiteFooter />
        </Router>
    }
}
