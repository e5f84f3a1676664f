//! Blog Post Components
//!
//! Card shown in the blog list and the modal opened by "Read More".

use folio_core::domain::Blog;
use leptos::ev;
use leptos::prelude::*;

use crate::format::{display_date, post_dom_id};
use crate::markdown::parse_markdown;

const CARD_EXCERPT_CHARS: usize = 100;

#[component]
pub fn PostCard(blog: Blog, #[prop(into)] on_read_more: Callback<Blog>) -> impl IntoView {
    let dom_id = post_dom_id(&blog.id);
    let permalink = blog.permalink();
    let date = display_date(blog.created_at);
    let excerpt = blog.excerpt(CARD_EXCERPT_CHARS);
    let category = blog.category_label();
    let image = (!blog.image_url.is_empty()).then(|| {
        view! { <img class="post-image" src=blog.image_url.clone() alt=blog.title.clone() loading="lazy" /> }
    });
    let title = blog.title.clone();
    let author = blog.author.clone();

    view! {
        <article class="blog-post" id=dom_id>
            {image}
            <div class="post-content">
                <h2 class="post-title"><a href=permalink>{title}</a></h2>
                <div class="post-meta">
                    <span class="post-author">"By " {author}</span>
                    <span class="post-date">{date}</span>
                    <span class="post-category">{category}</span>
                </div>
                <p class="post-excerpt">{excerpt}</p>
                <button class="read-more" on:click=move |_| on_read_more.run(blog.clone())>
                    "Read More"
                </button>
            </div>
        </article>
    }
}

/// Full post overlay. Closes on the × button, a backdrop click or Escape.
#[component]
pub fn PostModal(
    #[prop(into)] post: Signal<Option<Blog>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && post.get_untracked().is_some() {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    move || {
        post.get().map(|blog| {
            let html = parse_markdown(&blog.content);
            view! {
                <div class="modal" role="dialog" aria-modal="true" on:click=move |_| on_close.run(())>
                    <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                        <button class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                        <h2>{blog.title.clone()}</h2>
                        <div class="post-meta">
                            <span>"By " {blog.author.clone()}</span>
                            <span>{display_date(blog.created_at)}</span>
                        </div>
                        {(!blog.image_url.is_empty()).then(|| view! {
                            <img class="modal-image" src=blog.image_url.clone() alt=blog.title.clone() />
                        })}
                        <div class="modal-body markdown-body" inner_html=html></div>
                    </div>
                </div>
            }
        })
    }
}
