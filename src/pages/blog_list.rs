//! Blog List Page
//!
//! Published posts through a [`ListController`]: category and tag sidebars,
//! recent posts, pagination and the Read More modal. The controller pushes
//! each changed snapshot into a signal; the view only reads that signal.

use chrono::Utc;
use folio_core::domain::Blog;
use folio_core::seo::blog_posting;
use folio_core::view_model::{Facet, FacetValue, ListController, ListSnapshot};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::{FacetList, PaginationBar, PostCard, PostModal};
use crate::context::use_app;
use crate::format::post_dom_id;
use crate::models::LoadState;

const JSON_LD_PREFIX: &str = "ld-post-";

#[component]
pub fn BlogListPage() -> impl IntoView {
    let ctx = use_app();
    let (snapshot, set_snapshot) = signal(ListSnapshot::<Blog>::default());
    let (state, set_state) = signal(LoadState::Loading);
    let (open_post, set_open_post) = signal(None::<Blog>);

    let controller = StoredValue::new_local(ListController::new(
        ctx.with_config(|c| c.list_config()),
        move |s: &ListSnapshot<Blog>| set_snapshot.set(s.clone()),
    ));

    browser::set_title(&ctx.with_config(|c| format!("Blog | {}", c.site_name)));

    spawn_local(async move {
        match ctx.repo::<Blog>().list().await {
            Ok(blogs) => {
                let public: Vec<Blog> = blogs
                    .into_iter()
                    .filter(|b| ctx.with_config(|c| c.is_public(b.published)))
                    .collect();
                log::info!("blog list: {} posts", public.len());
                controller.update_value(|c| c.load(public));
                set_state.set(LoadState::Ready);
            }
            Err(e) => set_state.set(LoadState::failed(&e, "blogs")),
        }
    });

    // Structured data for the posts on screen
    Effect::new(move |_| {
        browser::clear_json_ld(JSON_LD_PREFIX);
        let now = Utc::now();
        snapshot.with(|s| {
            ctx.with_config(|cfg| {
                for blog in &s.page_items {
                    let url = cfg.absolute_url(&blog.permalink());
                    let data = blog_posting(blog, &cfg.seo(), Some(&url), now);
                    browser::set_json_ld(&format!("{}{}", JSON_LD_PREFIX, blog.id), &data);
                }
            })
        });
    });
    on_cleanup(|| browser::clear_json_ld(JSON_LD_PREFIX));

    let select = move |facet: Facet| {
        Callback::new(move |value: FacetValue| controller.update_value(|c| c.set_filter(facet, value)))
    };
    let go_to_page = move |n: usize| {
        if controller.try_update_value(|c| c.go_to_page(n)).unwrap_or(false) {
            browser::scroll_to_top();
        }
    };
    let reveal = move |id: String| {
        if controller.try_update_value(|c| c.reveal(&id)).unwrap_or(false) {
            let target = post_dom_id(&id);
            request_animation_frame(move || browser::scroll_to(&target));
        }
    };

    view! {
        <section class="blog-hero">
            <h1>"Blog"</h1>
            <p>"Notes on projects, tools and things learned along the way."</p>
        </section>

        <div class="blog-layout">
            <main class="blog-posts">
                {move || match state.get() {
                    LoadState::Loading => view! { <p class="placeholder">"Loading blogs..."</p> }.into_any(),
                    LoadState::Failed(msg) => view! { <p class="placeholder">{msg}</p> }.into_any(),
                    LoadState::Ready if snapshot.with(|s| s.matched == 0) => {
                        view! { <p class="placeholder">"No blogs found."</p> }.into_any()
                    }
                    LoadState::Ready => view! {
                        <For
                            each=move || snapshot.get().page_items
                            key=|b| b.id.clone()
                            children=move |blog| view! {
                                <PostCard blog=blog on_read_more=move |b| set_open_post.set(Some(b)) />
                            }
                        />
                        <PaginationBar
                            pagination=Signal::derive(move || snapshot.get().pagination)
                            on_page=go_to_page
                        />
                    }.into_any(),
                }}
            </main>

            <aside class="blog-sidebar">
                <FacetList
                    title="Categories"
                    options=Signal::derive(move || snapshot.get().categories)
                    selected=Signal::derive(move || snapshot.get().filter.category)
                    on_select=select(Facet::Category)
                />
                <FacetList
                    title="Tags"
                    options=Signal::derive(move || snapshot.get().tags)
                    selected=Signal::derive(move || snapshot.get().filter.tag)
                    on_select=select(Facet::Tag)
                />
                <div class="sidebar-widget">
                    <h3>"Recent Posts"</h3>
                    <ul class="recent-posts">
                        <For
                            each=move || snapshot.get().recent_items
                            key=|b| b.id.clone()
                            children=move |blog| {
                                let id = blog.id.clone();
                                view! {
                                    <li>
                                        <a
                                            href=format!("#{}", post_dom_id(&blog.id))
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                reveal(id.clone());
                                            }
                                        >
                                            {blog.title.clone()}
                                        </a>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </aside>
        </div>

        <PostModal post=open_post on_close=move |_| set_open_post.set(None) />
    }
}
