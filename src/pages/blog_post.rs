//! Single Post Page
//!
//! `/blog/post?id=…&slug=…`. Only `id` selects the post; `slug` is cosmetic.

use chrono::Utc;
use folio_core::domain::Blog;
use folio_core::seo::{blog_posting, document_title, meta_description};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::browser;
use crate::context::{use_app, AppContext};
use crate::format::display_date;
use crate::markdown::parse_markdown;
use crate::models::LoadState;

const JSON_LD_ID: &str = "ld-blog-post";

#[component]
fn PostSkeleton() -> impl IntoView {
    view! {
        <div class="blog-skeleton" aria-busy="true">
            <div class="skeleton-title"></div>
            <div class="skeleton-meta"></div>
            <div class="skeleton-image"></div>
            <div class="skeleton-content">
                <div class="skeleton-line"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line"></div>
            </div>
        </div>
    }
}

/// Title, meta description and JSON-LD for `blog`.
fn describe_page(ctx: AppContext, blog: &Blog) {
    ctx.with_config(|cfg| {
        browser::set_title(&document_title(&blog.title, &cfg.site_name));
        browser::set_meta_description(&meta_description(&blog.content));
        let url = browser::current_url();
        browser::set_json_ld(JSON_LD_ID, &blog_posting(blog, &cfg.seo(), url.as_deref(), Utc::now()));
    });
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let ctx = use_app();
    let query = use_query_map();
    let navigate = use_navigate();

    let (post, set_post) = signal(None::<Blog>);
    let (state, set_state) = signal(LoadState::Loading);

    Effect::new(move |_| {
        let id = query.with(|q| q.get("id")).filter(|id| !id.trim().is_empty());
        let Some(id) = id else {
            set_state.set(LoadState::Failed("Blog ID not provided.".to_string()));
            return;
        };
        set_state.set(LoadState::Loading);
        spawn_local(async move {
            match ctx.repo::<Blog>().find_by_id(&id).await {
                Ok(blog) => {
                    describe_page(ctx, &blog);
                    set_post.set(Some(blog));
                    set_state.set(LoadState::Ready);
                }
                Err(e) => set_state.set(LoadState::failed(&e, "blog")),
            }
        });
    });
    on_cleanup(|| browser::clear_json_ld(JSON_LD_ID));

    let back = move |_| navigate("/blog", Default::default());

    view! {
        <div class="blog-container">
            <button class="back-btn" on:click=back>"← Back to Blog"</button>
            {move || match state.get() {
                LoadState::Loading => view! { <PostSkeleton /> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="placeholder">{msg}</p> }.into_any(),
                LoadState::Ready => post.get().map(|blog| {
                    let html = parse_markdown(&blog.content);
                    view! {
                        <article class="blog-single">
                            <h1 class="blog-title">{blog.title.clone()}</h1>
                            <div class="post-meta">
                                <span>"By " {blog.author.clone()}</span>
                                <span>{display_date(blog.created_at)}</span>
                                <span>{blog.category_label()}</span>
                            </div>
                            {(!blog.image_url.is_empty()).then(|| view! {
                                <img class="blog-image" src=blog.image_url.clone() alt=blog.title.clone() />
                            })}
                            <div class="blog-content markdown-body" inner_html=html></div>
                            <div class="blog-tags">
                                {blog.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
                            </div>
                        </article>
                    }
                }).into_any(),
            }}
        </div>
    }
}
